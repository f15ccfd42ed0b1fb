//! UI Components
//!
//! Leptos components for the board page and the assignment form.

mod kanban_board;
mod lane_column;
mod story_card;
mod type_filter;
mod notice_modal;
mod member_info;

pub use kanban_board::KanbanBoard;
pub use lane_column::LaneColumn;
pub use story_card::StoryCard;
pub use type_filter::TypeFilter;
pub use notice_modal::NoticeModal;
pub use member_info::MemberInfo;
