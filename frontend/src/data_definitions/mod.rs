pub mod translations;
pub mod url_query;
