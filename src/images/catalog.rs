//! Curated keyword catalog for recipe images.
//!
//! Entries are grouped by cuisine family with the most specific keywords
//! first inside each family. Substring matching walks this slice in order,
//! so moving an entry changes which image wins a tie.

pub const IMAGE_HOST: &str = "https://images.unsplash.com";

pub const IMAGE_PARAMS: &str = "w=800&h=600&fit=crop&q=80";

pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 600;

pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800&h=600&fit=crop&q=80";

/// Ordered `(keyword, image id)` pairs.
pub const KEYWORD_IMAGES: &[(&str, &str)] = &[
    // Italian
    ("pizza", "photo-1565299624946-b28f40a0ae38"),
    ("spaghetti carbonara", "photo-1612874742237-6526221588e3"),
    ("spaghetti bolognese", "photo-1622973536968-3ead9e780960"),
    ("lasagne", "photo-1574894709920-11b28e7367e3"),
    ("lasagna", "photo-1574894709920-11b28e7367e3"),
    ("risotto", "photo-1476124369491-e7addf5db371"),
    ("gnocchi", "photo-1633436375153-d7045cb93e38"),
    ("ravioli", "photo-1587740908075-9e245070dfaa"),
    ("tiramisu", "photo-1571877227200-a0d98ea607e9"),
    ("spaghetti", "photo-1551892374-ecf8754cf8b0"),
    ("pasta", "photo-1621996346565-e3dbc646d9a9"),
    // Indian
    ("butter chicken", "photo-1603894584373-5ac82b2ae398"),
    ("tikka masala", "photo-1565557623262-b51c2513a641"),
    ("biryani", "photo-1563379091339-03b21ab4a4f8"),
    ("tandoori", "photo-1599487488170-d11ec9c172f0"),
    ("dal", "photo-1546833999-b9f581a1996d"),
    ("naan", "photo-1601050690597-df0568f70950"),
    ("curry", "photo-1585937421612-70a008356fbe"),
    // Chinese
    ("kung pao", "photo-1525755662778-989d0524087e"),
    ("sweet and sour", "photo-1563245372-f21724e3856d"),
    ("chow mein", "photo-1585032226651-759b368d7246"),
    ("fried rice", "photo-1603133872878-684f208fb84b"),
    ("dumplings", "photo-1496116218417-1a781b1c416c"),
    ("spring rolls", "photo-1544025162-d76694265947"),
    // Japanese
    ("teriyaki", "photo-1609183480237-ccbb2d7c5772"),
    ("katsu", "photo-1604908176997-125f25cc6f3d"),
    ("ramen", "photo-1569718212165-3a8278d5f624"),
    ("sushi", "photo-1579871494447-9811cf80d66c"),
    ("tempura", "photo-1581781870027-04212e231e96"),
    // Thai
    ("pad thai", "photo-1559314809-0d155014e29e"),
    ("green curry", "photo-1455619452474-d2be8b1e70cd"),
    ("tom yum", "photo-1548943487-a2e4e43b4853"),
    // Korean
    ("bibimbap", "photo-1590301157890-4810ed352733"),
    ("bulgogi", "photo-1632558610168-8377309e34c7"),
    ("kimchi", "photo-1583224964978-2257b960c3d3"),
    // Vietnamese
    ("banh mi", "photo-1600454309261-3dc9b7597637"),
    ("pho", "photo-1582878826629-29b7ad1cdc43"),
    // Mexican
    ("enchiladas", "photo-1534352956036-cd81e27dd615"),
    ("quesadilla", "photo-1618040996337-56904b7850b9"),
    ("burrito", "photo-1626700051175-6818013e1d4f"),
    ("fajitas", "photo-1599974579688-8dbdd335c77f"),
    ("tacos", "photo-1565299585323-38d6b0865b47"),
    ("guacamole", "photo-1600335895229-6e75511892c8"),
    // French
    ("coq au vin", "photo-1600891964599-f61ba0e24092"),
    ("ratatouille", "photo-1572453800999-e8d2d1589b7c"),
    ("croissant", "photo-1555507036-ab1f4038808a"),
    ("quiche", "photo-1608855238293-a8853e7f7c98"),
    ("crepes", "photo-1519676867240-f03562e64548"),
    // Spanish
    ("paella", "photo-1534080564583-6be75777b70a"),
    ("tapas", "photo-1515443961218-a51367888e4b"),
    ("churros", "photo-1624371414361-e670edf4898d"),
    // Greek / Middle Eastern
    ("moussaka", "photo-1600803907087-f56d462fd26b"),
    ("souvlaki", "photo-1529006557810-274b9b2fc783"),
    ("falafel", "photo-1593001874117-c99c800e3eb7"),
    ("hummus", "photo-1577805947697-89e18249d767"),
    ("shawarma", "photo-1561651823-34feb02250e4"),
    // American / British
    ("cheeseburger", "photo-1550547660-d9450f859349"),
    ("burger", "photo-1568901346375-23c9450c58cd"),
    ("mac and cheese", "photo-1543339494-b4cd4f7ba686"),
    ("bbq ribs", "photo-1544025162-d76694265947"),
    ("fried chicken", "photo-1626645738196-c2a7c87a8f58"),
    ("shepherd's pie", "photo-1619221882266-b7e5e0a0b2b6"),
    ("pie", "photo-1621743478914-cc8a86d7e7b5"),
    // Seafood
    ("salmon", "photo-1467003909585-2f8a72700288"),
    ("shrimp", "photo-1565680018434-b513d5e5fd47"),
    ("prawn", "photo-1625943553852-781c6dd46faa"),
    ("lobster", "photo-1553247407-23251ce81f59"),
    ("seafood", "photo-1615141982883-c7ad0e69fd62"),
    // Soups and salads
    ("chowder", "photo-1551326844-4df70f78d0e9"),
    ("stew", "photo-1534939561126-855b8675edd7"),
    ("soup", "photo-1547592166-23ac45744acd"),
    ("caesar salad", "photo-1550304943-4f24f54ddde9"),
    ("salad", "photo-1512621776951-a57141f2eefd"),
    // Breakfast
    ("pancakes", "photo-1567620905732-2d1ec7ab7445"),
    ("french toast", "photo-1484723091739-30a097e8f929"),
    ("omelette", "photo-1510693206972-df098062cb71"),
    ("eggs benedict", "photo-1608039829572-78524f79c4c7"),
    // Desserts
    ("cheesecake", "photo-1533134242443-d4fd215305ad"),
    ("brownies", "photo-1606313564200-e75d5e30476c"),
    ("chocolate", "photo-1481391319762-47dff72954d9"),
    ("cake", "photo-1578985545062-69928b1d9587"),
    ("pudding", "photo-1488477181946-6428a0291777"),
    ("tart", "photo-1519915028121-7d3463d20b13"),
    // Meats
    ("steak", "photo-1600891964092-4316c288032e"),
    ("roast chicken", "photo-1598103442097-8b74394b95c6"),
    ("lamb", "photo-1574484284002-952d92456975"),
    ("pork", "photo-1432139509613-5c4255815697"),
    ("beef", "photo-1529692236671-f1f6cf9683ba"),
    ("chicken", "photo-1604908176997-125f25cc6f3d"),
];

/// Ordered cuisine substrings and the keyword whose image stands in for them.
pub const CUISINE_KEYWORDS: &[(&str, &str)] = &[
    ("indian", "curry"),
    ("chinese", "fried rice"),
    ("italian", "pasta"),
    ("mexican", "tacos"),
    ("japanese", "sushi"),
    ("thai", "pad thai"),
    ("korean", "bibimbap"),
    ("vietnamese", "pho"),
    ("french", "croissant"),
    ("spanish", "paella"),
    ("seafood", "seafood"),
];

/// Coarse title fragments, tested in order, and their representative keyword.
pub const CATEGORY_KEYWORDS: &[(&[&str], &str)] = &[
    (&["soup"], "soup"),
    (&["dessert", "cake", "cookie"], "cake"),
    (&["breakfast", "pancake", "waffle"], "pancakes"),
    (&["fish", "shrimp", "salmon"], "salmon"),
];

/// Full catalog URL for an image id
pub fn image_url(image_id: &str) -> String {
    format!("{}/{}?{}", IMAGE_HOST, image_id, IMAGE_PARAMS)
}

/// Image id registered for `keyword`, if any
pub fn image_for_keyword(keyword: &str) -> Option<&'static str> {
    KEYWORD_IMAGES
        .iter()
        .find(|(key, _)| *key == keyword)
        .map(|(_, id)| *id)
}

/// The ordered keyword table
pub fn catalog() -> &'static [(&'static str, &'static str)] {
    KEYWORD_IMAGES
}
