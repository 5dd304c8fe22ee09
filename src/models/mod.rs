//! Course scheduling domain models.
//!
//! The types a final-exam scheduler works over: catalog courses,
//! scheduled sections, meeting-day masks, raw HHMM time intervals,
//! and the exam categories sections are grouped into.

mod category;
mod course;
mod day;
mod interval;
mod section;

pub use category::Category;
pub use course::Course;
pub use day::{DayMask, Weekday};
pub use interval::{format_hhmm, TimeInterval};
pub use section::{Section, SectionError};
