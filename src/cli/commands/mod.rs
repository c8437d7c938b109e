pub mod entries;
pub mod list;
pub mod remove;
pub mod toggle;

use crate::error::{BootrecovError, ScriptError};

pub fn exit_for_script_error(err: &ScriptError) -> ! {
    let code = match err {
        ScriptError::NotFound(_) => 12,
        ScriptError::PermissionDenied(_) => 13,
        ScriptError::Io(_, _) => 14,
    };
    println!("{}", err);
    std::process::exit(code);
}

pub fn exit_for_error(err: &BootrecovError) -> ! {
    match err {
        BootrecovError::Script(script) => exit_for_script_error(script),
        _ => {
            println!("{}", err);
            std::process::exit(2);
        }
    }
}
