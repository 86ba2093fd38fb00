//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults directly through SeaORM, bypassing
//! service validation. That makes it possible to seed states the services would reject,
//! such as reservations that already started.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let room = factory::meeting_room::create_meeting_room(&db).await?;
//!
//!     let (user, room, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .superuser(true)
//!     .build()
//!     .await?;
//!
//! let reservation = factory::reservation::ReservationFactory::new(&db, room.id, user.id)
//!     .range(from, to)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod meeting_room;
pub mod reservation;
pub mod user;

pub use meeting_room::create_meeting_room;
pub use reservation::{create_reservation, create_reservation_at};
pub use user::{create_superuser, create_user};
