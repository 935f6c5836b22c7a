use axum::response::Html;

pub const WELCOME: &str = concat!(
    "Welcome to the Climate Analysis API!<br/>",
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/<start><br/>",
    "/api/v1.0/<start>/<end><br/>",
);

#[axum::debug_handler]
pub async fn get_home() -> Html<&'static str> {
    Html(WELCOME)
}
