mod card;
mod detail;
mod list;

pub use card::GuideCardView;
pub use detail::{GuideDetailPage, GuideDetailContent};
pub use list::GuidesPage;
