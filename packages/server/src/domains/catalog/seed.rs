//! Demo catalog contents.

use chrono::{DateTime, TimeZone, Utc};

use crate::common::ListingId;

use super::models::{Category, Condition, Listing};

/// The six demo listings the marketplace boots with.
///
/// Ordered oldest-last so the catalog reads newest-first like live data.
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId::new(),
            name: "Arduino Uno R3 - Barely Used".to_string(),
            price: 1200.0,
            category: Category::Microcontrollers,
            condition: Condition::LikeNew,
            description: "Original Arduino Uno. Used for one semester intro class. \
                          Includes USB cable and a sturdy plastic case."
                .to_string(),
            image: "https://picsum.photos/seed/arduino/400/400".to_string(),
            seller: "Alex J.".to_string(),
            posted_date: seed_date(1),
            whatsapp: Some("+919876543210".to_string()),
            linkedin: Some("alex-j-maker".to_string()),
        },
        Listing {
            id: ListingId::new(),
            name: "Pack of 65 Jumper Wires".to_string(),
            price: 250.0,
            category: Category::Components,
            condition: Condition::New,
            description: "Assorted lengths, male-to-male. High quality silicone insulation. \
                          Never opened."
                .to_string(),
            image: "https://picsum.photos/seed/jumper/400/400".to_string(),
            seller: "Sarah W.".to_string(),
            posted_date: seed_date(2),
            whatsapp: Some("+919876543211".to_string()),
            linkedin: Some("sarah-w-engineering".to_string()),
        },
        Listing {
            id: ListingId::new(),
            name: "Ultrasonic Distance Sensor HC-SR04".to_string(),
            price: 150.0,
            category: Category::Sensors,
            condition: Condition::UsedGood,
            description: "Working perfectly. Great for obstacle avoidance robots or \
                          automated distance measurement."
                .to_string(),
            image: "https://picsum.photos/seed/sensor/400/400".to_string(),
            seller: "Mike T.".to_string(),
            posted_date: seed_date(3),
            whatsapp: None,
            linkedin: Some("mike-tech-student".to_string()),
        },
        Listing {
            id: ListingId::new(),
            name: "Portable Soldering Iron Kit".to_string(),
            price: 1800.0,
            category: Category::Tools,
            condition: Condition::UsedGood,
            description: "Adjustable temperature soldering iron with stand, solder wire, \
                          and several replacement tips."
                .to_string(),
            image: "https://picsum.photos/seed/solder/400/400".to_string(),
            seller: "Emily R.".to_string(),
            posted_date: seed_date(4),
            whatsapp: Some("+919876543212".to_string()),
            linkedin: None,
        },
        Listing {
            id: ListingId::new(),
            name: "ESP32 Development Board".to_string(),
            price: 650.0,
            category: Category::Microcontrollers,
            condition: Condition::LikeNew,
            description: "WiFi + Bluetooth enabled. Perfect for IoT projects and web servers. \
                          Pins are pre-soldered."
                .to_string(),
            image: "https://picsum.photos/seed/esp32/400/400".to_string(),
            seller: "Jason K.".to_string(),
            posted_date: seed_date(5),
            whatsapp: Some("+919876543213".to_string()),
            linkedin: Some("jason-k-iot".to_string()),
        },
        Listing {
            id: ListingId::new(),
            name: "Raspberry Pi 4 (4GB RAM)".to_string(),
            price: 4500.0,
            category: Category::Microcontrollers,
            condition: Condition::UsedGood,
            description: "Includes official power adapter and 32GB SD card. Slightly \
                          scratched case but hardware is 100%."
                .to_string(),
            image: "https://picsum.photos/seed/pi4/400/400".to_string(),
            seller: "Lisa M.".to_string(),
            posted_date: seed_date(6),
            whatsapp: Some("+919876543214".to_string()),
            linkedin: Some("lisa-m-developer".to_string()),
        },
    ]
    .into_iter()
    .rev()
    .collect()
}

fn seed_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, day, 0, 0, 0)
        .single()
        .expect("valid seed timestamp")
}
