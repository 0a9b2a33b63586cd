use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Index,
    Health,
    Wishlists,
    Items,
}
