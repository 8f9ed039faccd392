use sea_orm::*;

use crate::models::location::{self, Category, CoolnessRating};

fn photos_json(urls: &[&str]) -> Option<String> {
    Some(serde_json::to_string(urls).unwrap_or_default())
}

/// Seed the sample city guide. A no-op when the table already has data,
/// so repeated starts with SEED_DEMO set don't duplicate rows.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = location::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::info!("Locations already present ({}), skipping seed", existing);
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();

    let sample_locations = vec![
        location::ActiveModel {
            id: NotSet,
            name: Set("Batumi Boulevard".to_owned()),
            description: Set("A 7km-long seaside promenade along the Black Sea coast. \
                 Perfect for walking, cycling, and enjoying the sea views."
                .to_owned()),
            category: Set(Category::Park),
            visited: Set(false),
            latitude: Set(41.6504),
            longitude: Set(41.6352),
            photos: Set(photos_json(&[
                "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8d/Batumi_Boulevard.jpg/1280px-Batumi_Boulevard.jpg",
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/17/8c/15/3e/batumi-boulevard.jpg?w=1200&h=-1&s=1",
            ])),
            address: Set(Some("Batumi Beach, Batumi, Georgia".to_owned())),
            phone: Set(None),
            website: Set(None),
            opening_hours: Set(Some("Open 24 hours".to_owned())),
            external_map_url: Set(Some("https://maps.google.com/?q=41.6504,41.6352".to_owned())),
            coolness_rating: Set(Some(CoolnessRating::MustSee)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        location::ActiveModel {
            id: NotSet,
            name: Set("Batumi Botanical Garden".to_owned()),
            description: Set("One of the largest botanical gardens in the former Soviet Union, \
                 featuring plants from nine different geographical zones."
                .to_owned()),
            category: Set(Category::Park),
            visited: Set(false),
            latitude: Set(41.7019),
            longitude: Set(41.7061),
            photos: Set(photos_json(&[
                "https://upload.wikimedia.org/wikipedia/commons/thumb/4/47/Batumi_Botanical_Garden_entrance.jpg/1280px-Batumi_Botanical_Garden_entrance.jpg",
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/0d/b4/60/eb/batumi-botanical-gardens.jpg?w=1200&h=-1&s=1",
            ])),
            address: Set(Some("Mtsvane Kontskhi, Batumi, Georgia".to_owned())),
            phone: Set(Some("+995 422 27 15 00".to_owned())),
            website: Set(Some("http://bbg.ge/en/".to_owned())),
            opening_hours: Set(Some(
                "09:00-19:00 daily (May-October), 09:00-17:00 daily (November-April)".to_owned(),
            )),
            external_map_url: Set(Some("https://maps.google.com/?q=41.7019,41.7061".to_owned())),
            coolness_rating: Set(Some(CoolnessRating::MustSee)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        location::ActiveModel {
            id: NotSet,
            name: Set("Piazza Square".to_owned()),
            description: Set("A beautiful square built in Italian architectural style, \
                 home to many restaurants and cafes."
                .to_owned()),
            category: Set(Category::HistoricalSite),
            visited: Set(false),
            latitude: Set(41.6518),
            longitude: Set(41.6369),
            photos: Set(photos_json(&[
                "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3b/Batumi_Piazza_Square.jpg/1280px-Batumi_Piazza_Square.jpg",
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/0d/b4/5f/a9/piazza-batumi.jpg?w=1200&h=-1&s=1",
            ])),
            address: Set(Some("Piazza Square, Batumi, Georgia".to_owned())),
            phone: Set(None),
            website: Set(None),
            opening_hours: Set(Some("Open 24 hours".to_owned())),
            external_map_url: Set(Some("https://maps.google.com/?q=41.6518,41.6369".to_owned())),
            coolness_rating: Set(Some(CoolnessRating::Cool)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        location::ActiveModel {
            id: NotSet,
            name: Set("Ali and Nino Moving Sculpture".to_owned()),
            description: Set("A 7-meter-tall moving metal sculpture based on the famous novel, \
                 symbolizing love between different nations."
                .to_owned()),
            category: Set(Category::Viewpoint),
            visited: Set(false),
            latitude: Set(41.6558),
            longitude: Set(41.6376),
            photos: Set(photos_json(&[
                "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f8/Ali_and_Nino_statue_in_Batumi.jpg/1280px-Ali_and_Nino_statue_in_Batumi.jpg",
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/0e/af/19/dd/ali-nino-statue.jpg?w=1200&h=-1&s=1",
            ])),
            address: Set(Some("Batumi Boulevard, Batumi, Georgia".to_owned())),
            phone: Set(None),
            website: Set(None),
            opening_hours: Set(Some("Best viewed at sunset".to_owned())),
            external_map_url: Set(Some("https://maps.google.com/?q=41.6558,41.6376".to_owned())),
            coolness_rating: Set(Some(CoolnessRating::Cool)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        location::ActiveModel {
            id: NotSet,
            name: Set("Batumi Old Town".to_owned()),
            description: Set("The historical center of Batumi with 19th-century architecture, \
                 small cafes, and souvenir shops."
                .to_owned()),
            category: Set(Category::HistoricalSite),
            visited: Set(false),
            latitude: Set(41.6491),
            longitude: Set(41.6387),
            photos: Set(photos_json(&[
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/10/03/a0/ae/old-town.jpg?w=1200&h=-1&s=1",
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/13/32/da/a9/batumi-old-town.jpg?w=1200&h=-1&s=1",
            ])),
            address: Set(Some("Old Town, Batumi, Georgia".to_owned())),
            phone: Set(None),
            website: Set(None),
            opening_hours: Set(Some(
                "Open 24 hours, shops typically open 10:00-20:00".to_owned(),
            )),
            external_map_url: Set(Some("https://maps.google.com/?q=41.6491,41.6387".to_owned())),
            coolness_rating: Set(Some(CoolnessRating::MustSee)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        location::ActiveModel {
            id: NotSet,
            name: Set("Batumi Archeological Museum".to_owned()),
            description: Set("Houses a collection of archaeological findings from the region, \
                 including artifacts from the Bronze Age."
                .to_owned()),
            category: Set(Category::Museum),
            visited: Set(false),
            latitude: Set(41.6506),
            longitude: Set(41.6360),
            photos: Set(photos_json(&[
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/0d/b4/5f/a5/batumi-archaeological.jpg?w=1200&h=-1&s=1",
            ])),
            address: Set(Some("Chavchavadze St, Batumi, Georgia".to_owned())),
            phone: Set(Some("+995 422 27 75 27".to_owned())),
            website: Set(None),
            opening_hours: Set(Some(
                "10:00-18:00 Tuesday-Sunday, Closed on Monday".to_owned(),
            )),
            external_map_url: Set(Some("https://maps.google.com/?q=41.6506,41.6360".to_owned())),
            coolness_rating: Set(Some(CoolnessRating::JustOk)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        location::ActiveModel {
            id: NotSet,
            name: Set("Sarpi Beach".to_owned()),
            description: Set("A pebble beach near the Turkish border with crystal clear water, \
                 one of the cleanest beaches in the region."
                .to_owned()),
            category: Set(Category::Beach),
            visited: Set(false),
            latitude: Set(41.5232),
            longitude: Set(41.5465),
            photos: Set(photos_json(&[
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/0d/b4/60/e9/sarpi-beach.jpg?w=1200&h=-1&s=1",
                "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/13/32/db/1c/sarpi-beach.jpg?w=1200&h=-1&s=1",
            ])),
            address: Set(Some("Sarpi, Georgia".to_owned())),
            phone: Set(None),
            website: Set(None),
            opening_hours: Set(Some("Open 24 hours".to_owned())),
            external_map_url: Set(Some("https://maps.google.com/?q=41.5232,41.5465".to_owned())),
            coolness_rating: Set(Some(CoolnessRating::Cool)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
    ];

    let count = sample_locations.len();
    location::Entity::insert_many(sample_locations).exec(db).await?;
    tracing::info!("Seeded {} sample locations", count);

    Ok(())
}
