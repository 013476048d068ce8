/// Top-level category holding the flower type display names.
pub const FLOWER_TYPES_CATEGORY: &str = "FlowerTypes";

const FLOWER_TYPES_AR: &[(&str, &str)] = &[
    ("sunflower", "عباد الشمس"),
    ("peony", "عود"),
    ("lily of the valley", "زهرة الوادي"),
    ("orchid", "أوركيد"),
    ("tulip", "توليب"),
    ("rose", "ورد"),
    ("mixed", "مختلط"),
    ("lily", "زنبق"),
    ("hydrangea", "هيدرانجيا"),
    ("carnation", "قرنفل"),
    ("pampas", "بامبز"),
    ("calla lily", "زنبق الكالا"),
    ("daffodil", "نرجس"),
];

/// Arabic display names applied to `FlowerTypes`, in application order.
pub fn flower_types() -> &'static [(&'static str, &'static str)] {
    FLOWER_TYPES_AR
}
