//! SGA Board Frontend Entry Point
//!
//! One binary serves every page: it mounts whatever the current page carries
//! data for (board, assignment form, select-all checkbox).

use sga_board::board::Board;
use sga_board::config::BoardConfig;
use sga_board::{app, boot, check_all, logger};

fn main() {
    console_error_panic_hook::set_once();
    let config = BoardConfig::from_page();
    logger::init(config.log_level);

    if let Some(boot) = boot::read_board_data() {
        match boot.and_then(Board::new) {
            Ok(board) => app::mount_board(board, config),
            Err(e) => log::error!("[BOOT] board not loaded: {}", e),
        }
    }

    if let Some(assignment) = boot::read_assignment_data() {
        match assignment {
            Ok(data) => app::mount_member_info(data),
            Err(e) => log::error!("[BOOT] assignment form not loaded: {}", e),
        }
    }

    if check_all::bind() {
        log::debug!("[BOOT] select-all bound");
    }
}
