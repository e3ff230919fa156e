use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vector2f::Vector2f;

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vector2f=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() {
    setup_logging();

    let mut heading = Vector2f::RIGHT;
    for _ in 0..4 {
        heading.println_debug_string();
        info!(angle = heading.absolute_angle(), "heading");
        heading.rotate(90.);
    }

    let mut unit = Vector2f::new(25., 0.);
    let target = Vector2f::new(25., 40.);
    while unit.distance_to(target) > 10. {
        unit.move_towards(target, 10.);
        unit.println_debug_string();
    }

    let halfway = Vector2f::lerp(Vector2f::ZERO, target, 0.5);
    info!(%halfway, "lerp");

    // zero length vectors have no direction, see the NaN vs the checked variant
    let mut still = Vector2f::ZERO;
    match still.try_normalized() {
        Ok(v) => info!(%v, "normalized"),
        Err(e) => info!(error = %e, "try_normalized refused"),
    }
    still.normalize();
    still.println_debug_string();
}
