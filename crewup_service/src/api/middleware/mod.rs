pub mod attach_session;
