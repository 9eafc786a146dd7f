//! Pages
//!
//! One component per route. Pages that list reference content take the
//! loaded `ReferenceData`; the router resolves missing entities beforehand.

mod home;
mod appendix;
mod schedule;
mod day;
mod grocery;
mod supplements;
mod nutrition;
mod recipe;
mod workouts;
mod workout;
mod more;

pub use home::HomePage;
pub use appendix::AppendixPage;
pub use schedule::SchedulePage;
pub use day::DayPage;
pub use grocery::GroceryPage;
pub use supplements::SupplementsPage;
pub use nutrition::NutritionPage;
pub use recipe::RecipePage;
pub use workouts::WorkoutsPage;
pub use workout::WorkoutPage;
pub use more::MorePage;
