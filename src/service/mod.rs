//! Service layer: everything that talks to the room on the bot's behalf.
//!
//! [`Dispatcher`] answers chat events, [`ScheduledAnnouncer`] posts the
//! phase announcements and [`Rescraper`] keeps the election snapshot fresh.

pub mod announcer;
pub mod dispatcher;
pub mod rescraper;
pub mod responses;
pub mod timer;

pub use announcer::{Boundary, BoundarySchedule, ScheduleStatus, ScheduledAnnouncer};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use rescraper::{RescrapeReport, Rescraper, RescraperHandle};
