//! The sample catalog the marketplace starts with.

use crate::catalog::{Category, Product};
use crate::ids::{ProductId, UserId};
use crate::money::Money;
use chrono::NaiveDate;

/// Number of listings in the seed catalog.
pub const SEED_LISTING_COUNT: usize = 25;

/// Images offered when a seller does not supply one.
pub const PLACEHOLDER_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=400",
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
    "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400",
    "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=400",
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
];

struct SeedListing {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    price: i64,
    image_url: &'static str,
    seller_id: &'static str,
    seller_name: &'static str,
    created_on: (i32, u32, u32),
}

/// Build the seed listings in catalog order.
pub fn seed_products() -> Vec<Product> {
    SEED
        .iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.created_on;
            let created_at = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Product {
                id: ProductId::new(seed.id),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                category: seed.category,
                price: Money::from_major(seed.price),
                image_url: seed.image_url.to_string(),
                seller_id: UserId::new(seed.seller_id),
                seller_name: seed.seller_name.to_string(),
                created_at,
            })
        })
        .collect()
}

const SEED: [SeedListing; SEED_LISTING_COUNT] = [
    SeedListing {
        id: "1",
        title: "Vintage Leather Jacket",
        description: "Beautiful vintage leather jacket in excellent condition. Perfect for casual wear.",
        category: Category::Clothing,
        price: 7050,
        image_url: "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=400",
        seller_id: "2",
        seller_name: "Sarah Johnson",
        created_on: (2024, 1, 15),
    },
    SeedListing {
        id: "2",
        title: "MacBook Pro 13\"",
        description: "MacBook Pro 13\" 2019 model. Works perfectly, minor scratches on the lid.",
        category: Category::Electronics,
        price: 53950,
        image_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400",
        seller_id: "3",
        seller_name: "Mike Chen",
        created_on: (2024, 1, 20),
    },
    SeedListing {
        id: "3",
        title: "Wooden Coffee Table",
        description: "Handcrafted wooden coffee table. Solid oak construction with beautiful grain.",
        category: Category::Furniture,
        price: 9960,
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400",
        seller_id: "4",
        seller_name: "Emma Davis",
        created_on: (2024, 1, 18),
    },
    SeedListing {
        id: "4",
        title: "Professional Camera",
        description: "Canon EOS R6 with 24-70mm lens. Excellent condition, barely used.",
        category: Category::Electronics,
        price: 99600,
        image_url: "https://images.unsplash.com/photo-1502920917128-1aa500764cbd?w=400",
        seller_id: "5",
        seller_name: "David Wilson",
        created_on: (2024, 1, 22),
    },
    SeedListing {
        id: "5",
        title: "Designer Handbag",
        description: "Authentic designer handbag. Gently used with original dustbag.",
        category: Category::Accessories,
        price: 29050,
        image_url: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400",
        seller_id: "6",
        seller_name: "Lisa Anderson",
        created_on: (2024, 1, 25),
    },
    SeedListing {
        id: "6",
        title: "Classic Novel Collection",
        description: "Set of 12 vintage classic novels including Pride & Prejudice, 1984, and more. Good condition.",
        category: Category::Books,
        price: 3735,
        image_url: "https://images.unsplash.com/photo-1622490836804-4069f1f6df53?w=400",
        seller_id: "7",
        seller_name: "Robert Kim",
        created_on: (2024, 1, 26),
    },
    SeedListing {
        id: "7",
        title: "Nike Running Shoes",
        description: "Barely used Nike running shoes, size 10. Excellent grip and comfort for daily runs.",
        category: Category::Sports,
        price: 6225,
        image_url: "https://images.unsplash.com/photo-1719523677291-a395426c1a87?w=400",
        seller_id: "8",
        seller_name: "Jennifer Lopez",
        created_on: (2024, 1, 27),
    },
    SeedListing {
        id: "8",
        title: "Wooden Dining Chair",
        description: "Solid oak dining chair with comfortable cushion. Perfect for any dining room setup.",
        category: Category::Furniture,
        price: 5395,
        image_url: "https://images.unsplash.com/photo-1702018706865-e5306a8fa007?w=400",
        seller_id: "9",
        seller_name: "Carlos Martinez",
        created_on: (2024, 1, 28),
    },
    SeedListing {
        id: "9",
        title: "Garden Tool Set",
        description: "Complete garden tool set including watering can, pruners, and hand trowels. Great for gardening enthusiasts.",
        category: Category::HomeAndGarden,
        price: 2905,
        image_url: "https://images.unsplash.com/photo-1640306107674-23b73a335f12?w=400",
        seller_id: "10",
        seller_name: "Amy Chen",
        created_on: (2024, 1, 29),
    },
    SeedListing {
        id: "10",
        title: "Vintage Film Camera",
        description: "Beautiful vintage 35mm film camera in working condition. Perfect for film photography enthusiasts.",
        category: Category::Electronics,
        price: 14940,
        image_url: "https://images.unsplash.com/photo-1689934402781-f8672d269143?w=400",
        seller_id: "11",
        seller_name: "Thomas Wright",
        created_on: (2024, 1, 30),
    },
    SeedListing {
        id: "11",
        title: "Warm Winter Coat",
        description: "High-quality winter coat with hood. Size M. Kept me warm through many winters!",
        category: Category::Clothing,
        price: 7885,
        image_url: "https://images.unsplash.com/photo-1706765779494-2705542ebe74?w=400",
        seller_id: "12",
        seller_name: "Maria Rodriguez",
        created_on: (2024, 2, 1),
    },
    SeedListing {
        id: "12",
        title: "Wireless Headphones",
        description: "Premium noise-canceling wireless headphones. Great sound quality, barely used with original case.",
        category: Category::Electronics,
        price: 12035,
        image_url: "https://images.unsplash.com/photo-1752055833666-bfca5443136b?w=400",
        seller_id: "13",
        seller_name: "Kevin Park",
        created_on: (2024, 2, 2),
    },
    SeedListing {
        id: "13",
        title: "Modern Desk Lamp",
        description: "Adjustable LED desk lamp with multiple brightness settings. Perfect for studying or work.",
        category: Category::HomeAndGarden,
        price: 3320,
        image_url: "https://images.unsplash.com/photo-1735807026641-dc0b979564bd?w=400",
        seller_id: "14",
        seller_name: "Rachel Green",
        created_on: (2024, 2, 3),
    },
    SeedListing {
        id: "14",
        title: "Vintage Wrist Watch",
        description: "Classic mechanical wrist watch with leather strap. Keeps perfect time and looks elegant.",
        category: Category::Accessories,
        price: 9960,
        image_url: "https://images.unsplash.com/photo-1611291223002-62f62dbba1a2?w=400",
        seller_id: "15",
        seller_name: "Daniel Foster",
        created_on: (2024, 2, 4),
    },
    SeedListing {
        id: "15",
        title: "Mountain Bike",
        description: "21-speed mountain bike in great condition. Perfect for trails and city commuting.",
        category: Category::Sports,
        price: 23240,
        image_url: "https://images.unsplash.com/photo-1726813828002-775d4b8e30ed?w=400",
        seller_id: "16",
        seller_name: "Jessica Taylor",
        created_on: (2024, 2, 5),
    },
    SeedListing {
        id: "16",
        title: "Glass Coffee Table",
        description: "Modern glass coffee table with metal legs. Adds elegance to any living room.",
        category: Category::Furniture,
        price: 11620,
        image_url: "https://images.unsplash.com/photo-1647967527216-adea2f078e07?w=400",
        seller_id: "17",
        seller_name: "Brandon Lee",
        created_on: (2024, 2, 6),
    },
    SeedListing {
        id: "17",
        title: "Stainless Steel Cookware",
        description: "Professional stainless steel pot set. Perfect for cooking enthusiasts. Includes 3 different sizes.",
        category: Category::HomeAndGarden,
        price: 7055,
        image_url: "https://images.unsplash.com/photo-1624016030785-ff5a4f36dde9?w=400",
        seller_id: "18",
        seller_name: "Nicole Wang",
        created_on: (2024, 2, 7),
    },
    SeedListing {
        id: "18",
        title: "Designer Sunglasses",
        description: "Stylish designer sunglasses with UV protection. Comes with original case and cleaning cloth.",
        category: Category::Accessories,
        price: 7055,
        image_url: "https://images.unsplash.com/photo-1718967807877-f2e04ffc7343?w=400",
        seller_id: "19",
        seller_name: "Steven Miller",
        created_on: (2024, 2, 8),
    },
    SeedListing {
        id: "19",
        title: "iPhone 12 Pro",
        description: "iPhone 12 Pro 128GB in space gray. Excellent condition with original charger and box.",
        category: Category::Electronics,
        price: 37350,
        image_url: "https://images.unsplash.com/photo-1675953935267-e039f13ddd79?w=400",
        seller_id: "20",
        seller_name: "Ashley Brown",
        created_on: (2024, 2, 9),
    },
    SeedListing {
        id: "20",
        title: "Yoga Mat & Accessories",
        description: "Premium yoga mat with carrying strap and yoga blocks. Perfect for home workouts and studio classes.",
        category: Category::Sports,
        price: 4565,
        image_url: "https://images.unsplash.com/photo-1746796751590-a8c0f15d4900?w=400",
        seller_id: "21",
        seller_name: "Monica Davis",
        created_on: (2024, 2, 10),
    },
    SeedListing {
        id: "21",
        title: "Literature Collection",
        description: "Curated collection of modern literature including Pulitzer winners. Perfect for book lovers.",
        category: Category::Books,
        price: 5395,
        image_url: "https://images.unsplash.com/photo-1638324143657-7f41d6a92a3c?w=400",
        seller_id: "22",
        seller_name: "Jonathan Smith",
        created_on: (2024, 2, 11),
    },
    SeedListing {
        id: "22",
        title: "Wool Winter Scarf",
        description: "Cozy wool scarf in navy blue. Perfect accessory for cold weather. Barely worn.",
        category: Category::Clothing,
        price: 2075,
        image_url: "https://images.unsplash.com/photo-1604843206973-fe1e58bf974e?w=400",
        seller_id: "23",
        seller_name: "Samantha White",
        created_on: (2024, 2, 12),
    },
    SeedListing {
        id: "23",
        title: "Gaming Keyboard",
        description: "Mechanical gaming keyboard with RGB lighting. Cherry MX switches for ultimate gaming experience.",
        category: Category::Electronics,
        price: 9130,
        image_url: "https://images.unsplash.com/photo-1612198188060-c7c2a3b66eae?w=400",
        seller_id: "24",
        seller_name: "Alex Johnson",
        created_on: (2024, 2, 13),
    },
    SeedListing {
        id: "24",
        title: "Ergonomic Office Chair",
        description: "Comfortable ergonomic office chair with lumbar support. Great for long work sessions.",
        category: Category::Furniture,
        price: 16185,
        image_url: "https://images.unsplash.com/photo-1688578735122-f37256f1b8b0?w=400",
        seller_id: "25",
        seller_name: "Ryan Thompson",
        created_on: (2024, 2, 14),
    },
    SeedListing {
        id: "25",
        title: "Succulent Garden Set",
        description: "Beautiful collection of succulent plants in decorative pots. Perfect for indoor gardening beginners.",
        category: Category::HomeAndGarden,
        price: 2490,
        image_url: "https://images.unsplash.com/photo-1621512366232-0b7b78983782?w=400",
        seller_id: "26",
        seller_name: "Emily Zhang",
        created_on: (2024, 2, 15),
    },
];
