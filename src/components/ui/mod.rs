mod alert;
mod button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind, Notice, NoticeBanner};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use spinner::Spinner;
