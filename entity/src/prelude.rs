pub use super::event::Entity as Event;
pub use super::event_volunteer::Entity as EventVolunteer;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
