//! Word pools for the generator. Kept small; uniqueness is guaranteed by
//! the UUID tag, not by pool size.

pub const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Maya", "Noah", "Iris", "Owen", "Dana", "Eli", "Nora", "Finn", "Lena", "Cole",
    "Ruth", "Jude", "Vera", "Seth",
];

pub const LAST_NAMES: &[&str] = &[
    "Reyes", "Holt", "Varga", "Okafor", "Lindqvist", "Moreau", "Tanaka", "Beck", "Castillo",
    "Novak", "Whitfield", "Iyer", "Sorensen", "Mercer",
];

pub const COMPANY_STEMS: &[&str] = &[
    "Cobalt", "Harbor", "Juniper", "Meridian", "Alder", "Summit", "Lantern", "Granite",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Labs", "Works", "Group", "Trading", "Supply", "Partners"];

pub const STREETS: &[&str] = &[
    "Birchwood Ave",
    "Halstead St",
    "Marlowe Dr",
    "Crescent Blvd",
    "Fenwick Ln",
    "Ashford Rd",
    "Kingsley Ct",
];

pub const STATES: &[&str] = &[
    "California",
    "Texas",
    "Ohio",
    "Vermont",
    "Oregon",
    "Georgia",
    "Colorado",
    "Maine",
];

pub const CITIES: &[&str] = &[
    "Ashton", "Brookfield", "Clearwater", "Dunmore", "Eastvale", "Fairhaven", "Grandview",
    "Halford",
];
