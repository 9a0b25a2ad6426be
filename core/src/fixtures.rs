//! Static fixture catalog backing mock mode.
//!
//! Sample records standing in for the real backend: six images across five
//! categories plus a single user. Declaration order is lookup order, and
//! nothing here is ever mutated — favorite toggles and uploads are not
//! persisted by the mock backend.

use once_cell::sync::Lazy;

use crate::types::{CategoryItem, ImageItem, UserInfo};

/// The in-memory catalog answered by the mock router.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub images: Vec<ImageItem>,
    pub categories: Vec<CategoryItem>,
    pub user: UserInfo,
}

/// Shared catalog instance used by the dispatcher.
pub static FIXTURES: Lazy<Fixtures> = Lazy::new(Fixtures::gallery);

impl Fixtures {
    /// Build the sample gallery catalog.
    pub fn gallery() -> Self {
        let images = vec![
            image(
                "1",
                "Mountain Vista",
                "Rolling hills at golden hour",
                &["landscape", "nature"],
                "1",
                "2024-01-15 10:30:00",
                false,
                "A. Calder",
                "2.5MB",
                1920,
                1280,
            ),
            image(
                "2",
                "City Nights",
                "Downtown skyline after dark",
                &["city", "night"],
                "2",
                "2024-01-14 20:45:00",
                true,
                "B. Reyes",
                "3.2MB",
                1920,
                1080,
            ),
            image(
                "3",
                "Portrait Study",
                "Studio portrait session",
                &["people", "portrait"],
                "3",
                "2024-01-13 14:20:00",
                false,
                "C. Okafor",
                "4.1MB",
                1080,
                1350,
            ),
            image(
                "4",
                "Morning Fox",
                "Red fox in early light",
                &["animals", "wildlife"],
                "4",
                "2024-01-12 09:15:00",
                true,
                "D. Fontaine",
                "1.8MB",
                1440,
                960,
            ),
            image(
                "5",
                "Concrete Curves",
                "Modern architecture detail",
                &["architecture", "art"],
                "1",
                "2024-01-11 16:00:00",
                false,
                "E. Lindqvist",
                "2.9MB",
                1600,
                1200,
            ),
            image(
                "6",
                "Saturday Brunch",
                "Food styling close-up",
                &["food", "styling"],
                "5",
                "2024-01-10 12:30:00",
                true,
                "F. Moreau",
                "3.5MB",
                1920,
                1440,
            ),
        ];

        let categories = vec![
            category("1", "Landscape", "Natural scenery and architecture", 10, 15),
            category("2", "City", "Urban views and street shots", 11, 8),
            category("3", "People", "Portrait photography", 12, 12),
            category("4", "Animals", "Wildlife and pets", 13, 6),
            category("5", "Food", "Food photography", 14, 9),
        ];

        let user = UserInfo {
            id: "1".to_string(),
            nickname: "gallery_user".to_string(),
            avatar: "https://picsum.photos/200/200?random=100".to_string(),
            email: "user@example.com".to_string(),
            phone: "138****8888".to_string(),
            favorite_count: 25,
            category_count: 8,
            upload_count: 156,
            join_time: "2023-12-01".to_string(),
        };

        Self {
            images,
            categories,
            user,
        }
    }

    /// First image whose id matches, in declaration order.
    pub fn image(&self, id: &str) -> Option<&ImageItem> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn category_images(&self, category_id: &str) -> Vec<ImageItem> {
        self.images
            .iter()
            .filter(|image| image.category_id == category_id)
            .cloned()
            .collect()
    }

    pub fn favorites(&self) -> Vec<ImageItem> {
        self.images
            .iter()
            .filter(|image| image.is_favorite)
            .cloned()
            .collect()
    }
}

fn image(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    category_id: &str,
    create_time: &str,
    is_favorite: bool,
    author: &str,
    size: &str,
    width: u32,
    height: u32,
) -> ImageItem {
    ImageItem {
        id: id.to_string(),
        url: format!("https://picsum.photos/400/600?random={id}"),
        thumbnail: format!("https://picsum.photos/200/300?random={id}"),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        category_id: category_id.to_string(),
        create_time: create_time.to_string(),
        is_favorite,
        author: author.to_string(),
        size: size.to_string(),
        width,
        height,
    }
}

fn category(id: &str, name: &str, description: &str, cover_seed: u32, count: u32) -> CategoryItem {
    CategoryItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        cover: format!("https://picsum.photos/300/200?random={cover_seed}"),
        count,
        create_time: "2024-01-01 00:00:00".to_string(),
    }
}
