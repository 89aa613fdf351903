//! Sample requests used to populate an empty store.
//!
//! The content is fixed so that seeding twice yields identical collections.

use crate::donation::{Category, DonationRecord, Status, Urgency};

struct Sample {
    id: i64,
    title: &'static str,
    description: &'static str,
    category: Category,
    quantity: &'static str,
    urgency: Urgency,
    location: &'static str,
    contact_info: &'static str,
    ngo_name: &'static str,
    ngo_contact: &'static str,
    posted_at: &'static str,
}

const SAMPLES: [Sample; 5] = [
    Sample {
        id: 1,
        title: "Winter Clothing for Children",
        description: "We need warm winter clothes for children aged 5-12 years. Items needed \
                      include jackets, sweaters, warm pants, and winter accessories. These \
                      donations will help keep children in our care warm during the cold months.",
        category: Category::ClothingAndTextiles,
        quantity: "50 pieces",
        urgency: Urgency::High,
        location: "Delhi, India",
        contact_info: "help@childcare.org",
        ngo_name: "Children's Care Foundation",
        ngo_contact: "+91 9876543210",
        posted_at: "2025-01-10T10:00:00Z",
    },
    Sample {
        id: 2,
        title: "Educational Books and Supplies",
        description: "Looking for textbooks, notebooks, pencils, and other educational \
                      materials for underprivileged students. We especially need mathematics \
                      and science books for grades 6-10.",
        category: Category::BooksAndEducation,
        quantity: "200 books, 100 notebooks",
        urgency: Urgency::Medium,
        location: "Mumbai, India",
        contact_info: "education@futurebuilders.org",
        ngo_name: "Future Builders NGO",
        ngo_contact: "+91 9876543211",
        posted_at: "2025-01-09T14:30:00Z",
    },
    Sample {
        id: 3,
        title: "Medical Equipment and Supplies",
        description: "Urgent need for basic medical supplies including bandages, antiseptics, \
                      thermometers, and blood pressure monitors for our community health center.",
        category: Category::MedicalSupplies,
        quantity: "Assorted medical supplies",
        urgency: Urgency::High,
        location: "Bangalore, India",
        contact_info: "medical@healthfirst.org",
        ngo_name: "Health First Organization",
        ngo_contact: "+91 9876543212",
        posted_at: "2025-01-08T09:15:00Z",
    },
    Sample {
        id: 4,
        title: "Food Supplies for Shelter",
        description: "We need non-perishable food items like rice, lentils, cooking oil, and \
                      canned goods for our homeless shelter. We serve approximately 100 people \
                      daily.",
        category: Category::FoodAndGroceries,
        quantity: "50kg rice, 20kg lentils, 10L oil",
        urgency: Urgency::Medium,
        location: "Chennai, India",
        contact_info: "shelter@safehaven.org",
        ngo_name: "Safe Haven Shelter",
        ngo_contact: "+91 9876543213",
        posted_at: "2025-01-07T16:45:00Z",
    },
    Sample {
        id: 5,
        title: "Toys and Games for Orphanage",
        description: "Looking for educational toys, board games, and recreational items for \
                      children in our orphanage. Age range is 3-15 years. Both indoor and \
                      outdoor play items are welcome.",
        category: Category::ToysAndGames,
        quantity: "30-40 toys and games",
        urgency: Urgency::Low,
        location: "Pune, India",
        contact_info: "care@brightfuture.org",
        ngo_name: "Bright Future Orphanage",
        ngo_contact: "+91 9876543214",
        posted_at: "2025-01-06T11:20:00Z",
    },
];

/// The sample collection, in display order.
///
/// Each sample NGO's id equals its record id.
#[must_use]
pub fn sample_donations() -> Vec<DonationRecord> {
    SAMPLES
        .iter()
        .map(|s| DonationRecord {
            id: s.id,
            title: s.title.to_string(),
            description: s.description.to_string(),
            category: s.category,
            quantity: s.quantity.to_string(),
            urgency: s.urgency,
            location: s.location.to_string(),
            contact_info: s.contact_info.to_string(),
            ngo_id: s.id,
            ngo_name: s.ngo_name.to_string(),
            ngo_contact: s.ngo_contact.to_string(),
            posted_at: s.posted_at.to_string(),
            status: Status::Active,
        })
        .collect()
}
