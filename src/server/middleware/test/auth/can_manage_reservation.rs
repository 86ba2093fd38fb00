use super::*;
use chrono::{Duration, Utc};

fn user(id: i32, is_superuser: bool) -> User {
    User {
        id,
        email: format!("user{}@example.com", id),
        is_active: true,
        is_superuser,
    }
}

fn reservation_owned_by(user_id: i32) -> Reservation {
    let from = Utc::now() + Duration::hours(1);
    Reservation {
        id: 1,
        meeting_room_id: 1,
        user_id,
        from_reserve: from,
        to_reserve: from + Duration::hours(1),
    }
}

/// Expected: owner may manage their own reservation
#[test]
fn owner_can_manage() {
    assert!(can_manage_reservation(&user(1, false), &reservation_owned_by(1)));
}

/// Expected: another regular user may not
#[test]
fn other_user_cannot_manage() {
    assert!(!can_manage_reservation(&user(2, false), &reservation_owned_by(1)));
}

/// Expected: a superuser may manage anyone's reservation
#[test]
fn superuser_can_manage() {
    assert!(can_manage_reservation(&user(2, true), &reservation_owned_by(1)));
}
