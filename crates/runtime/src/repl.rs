//! Interactive REPL.
//!
//! One VM lives for the whole session, so globals and functions defined
//! on earlier lines stay visible. History persists across sessions in
//! `~/.local/share/lark_history`.

use crate::config::VmOptions;
use crate::vm::Vm;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

fn history_file_path() -> Option<PathBuf> {
    home::home_dir().map(|d| d.join(".local/share/lark_history"))
}

pub fn run(options: VmOptions) -> Result<(), String> {
    let mut editor =
        DefaultEditor::new().map_err(|e| format!("Failed to start line editor: {e}"))?;

    let history = history_file_path();
    if let Some(path) = &history {
        // Missing history just means a first run.
        let _ = editor.load_history(path);
    }

    let mut vm = Vm::new();
    vm.set_options(options);

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "exit" {
                    break;
                }

                let _ = editor.add_history_entry(&line);
                if let Err(e) = vm.interpret(&line) {
                    eprintln!("{e}");
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Read error: {e}")),
        }
    }

    if let Some(path) = &history {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = editor.save_history(path) {
            eprintln!("Warning: could not save history: {e}");
        }
    }

    Ok(())
}
