//! CLI command handlers for the skillbridge application.

mod doctor;
mod init;
mod sync;

pub(crate) use doctor::handle_doctor_command;
pub(crate) use init::handle_init_command;
pub(crate) use sync::handle_sync_command;
