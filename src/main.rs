// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use log::error;

fn main() {
    if let Err(e) = supacrm_lib::run() {
        error!("failed to start SupaCRM: {:#}", e);
        eprintln!("failed to start SupaCRM: {:#}", e);
        std::process::exit(1);
    }
}
