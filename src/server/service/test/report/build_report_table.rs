use super::*;

/// Tests the sheet layout for two rooms.
///
/// Expected: title, caption and header rows followed by one row per room
#[test]
fn lays_out_header_and_counts() {
    let generated_at = Utc.with_ymd_and_hms(2030, 5, 17, 9, 5, 3).unwrap();
    let counts = vec![
        RoomReservationCount {
            meeting_room_id: 1,
            count: 4,
        },
        RoomReservationCount {
            meeting_room_id: 3,
            count: 1,
        },
    ];

    let rows = build_report_table(generated_at, &counts);

    assert_eq!(
        rows,
        vec![
            vec![json!("Report from"), json!("2030/05/17 09:05:03")],
            vec![json!("Meeting room reservation count")],
            vec![json!("Meeting room ID"), json!("Reservations")],
            vec![json!(1), json!(4)],
            vec![json!(3), json!(1)],
        ]
    );
}

/// Tests the layout without any reservations.
///
/// Expected: only the three header rows
#[test]
fn keeps_header_without_counts() {
    let rows = build_report_table(Utc::now(), &[]);

    assert_eq!(rows.len(), 3);
}
