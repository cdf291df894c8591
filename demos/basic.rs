use linelog::{Logger, MinLevel, OutputType, Params, TimeStyle};

fn main() {
    let mut logger = Logger::new();
    logger.set_level(MinLevel::Debug).set_time(TimeStyle::Iso);

    logger.info("server started");
    logger.debug_with(
        "connection accepted",
        linelog::params! { "peer" => "127.0.0.1:9000", "tls" => false },
    );
    logger.warn_with(
        "slow request",
        Params::new().add("route", "/search").add("ms", 1500),
    );

    logger.set_output(OutputType::Json).set_colorize(false);
    logger.error_with(
        "request failed",
        linelog::params! { "route" => "/search", "status" => 502 },
    );

    // The shared instance mirrors the same API
    linelog::configure(&linelog::Options {
        level: Some(MinLevel::Debug),
        ..Default::default()
    });
    linelog::info("via the shared logger");
}
