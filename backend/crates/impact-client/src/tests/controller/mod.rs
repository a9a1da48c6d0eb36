mod list;
mod notice_dismiss;
