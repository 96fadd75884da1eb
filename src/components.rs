mod filter;
mod map;
mod place_list;
mod popup;

pub use self::{filter::*, map::*, place_list::*, popup::*};
