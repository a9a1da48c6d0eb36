use crate::ProjectView;

/// Which busy indicator a flow holds
#[derive(Debug, Clone, Copy)]
enum Indicator {
    Submitting,
    Loading,
}

/// Turns a busy indicator on for as long as the guard lives.
///
/// Dropping the guard restores the indicator on every exit path, including
/// early returns and a cancelled future.
pub(crate) struct FlowGuard<'a, V: ProjectView + ?Sized> {
    view: &'a V,
    indicator: Indicator,
}

impl<'a, V: ProjectView + ?Sized> FlowGuard<'a, V> {
    pub(crate) fn submitting(view: &'a V) -> Self {
        view.set_submitting(true);
        Self {
            view,
            indicator: Indicator::Submitting,
        }
    }

    pub(crate) fn loading(view: &'a V) -> Self {
        view.set_loading(true);
        Self {
            view,
            indicator: Indicator::Loading,
        }
    }
}

impl<V: ProjectView + ?Sized> Drop for FlowGuard<'_, V> {
    fn drop(&mut self) {
        match self.indicator {
            Indicator::Submitting => self.view.set_submitting(false),
            Indicator::Loading => self.view.set_loading(false),
        }
    }
}
