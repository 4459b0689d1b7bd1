mod user_form;

pub(crate) use user_form::UserForm;
