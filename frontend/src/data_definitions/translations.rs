//! Static label lookup for the locale boundary.
//!
//! The engine itself is locale-agnostic; only the labels rendered around
//! it go through this table. Unknown keys fall back to the key itself so
//! a missing entry stays visible instead of failing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Vi,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Vi => "VI",
        }
    }
}

pub fn t(lang: Lang, key: &str) -> &str {
    match lang {
        Lang::En => match key {
            "tagline" => "Stop looking for an item — find it.",
            "placeholderSearch" => "Product, brand, color...",
            "filter" => "Filters",
            "clear" => "Clear filters",
            "category" => "Category",
            "brand" => "Brand",
            "placeholderBrand" => "Search for brands...",
            "price" => "Price",
            "freeShipping" => "Free shipping",
            "display" => "Display",
            "rating" => "Rating",
            "yes" => "Yes",
            "no" => "No",
            "noResults" => "No products match your search and filters.",
            "loading" => "Loading...",
            _ => key,
        },
        Lang::Vi => match key {
            "tagline" => "Đừng tìm kiếm sản phẩm — hãy tìm thấy nó.",
            "placeholderSearch" => "Sản phẩm, thương hiệu, màu sắc...",
            "filter" => "Bộ lọc",
            "clear" => "Xóa bộ lọc",
            "category" => "Danh mục",
            "brand" => "Thương hiệu",
            "placeholderBrand" => "Tìm thương hiệu...",
            "price" => "Giá",
            "freeShipping" => "Miễn phí vận chuyển",
            "display" => "Hiển thị",
            "rating" => "Đánh giá",
            "yes" => "Có",
            "no" => "Không",
            "noResults" => "Không tìm thấy sản phẩm phù hợp.",
            "loading" => "Đang tải...",
            _ => key,
        },
    }
}
