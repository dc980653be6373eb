//! Activity List
//!
//! The fixed dataset shown by the card stack. The first entry is the
//! summary row.

use crate::models::Activity;

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        id: 1,
        icon: "⛺",
        title: "Camping",
        location: "Yosemite Park",
        date: "25 Nov",
    },
    Activity {
        id: 2,
        icon: "⛵",
        title: "Boating",
        location: "Lake Tahoe Park",
        date: "12 August",
    },
    Activity {
        id: 3,
        icon: "🍖",
        title: "Barbecue",
        location: "Greenfield Shores",
        date: "28 July",
    },
];
