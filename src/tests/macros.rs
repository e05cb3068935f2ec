macro_rules! trace_capture {
    () => {
        use tracing_subscriber::filter::{LevelFilter, Targets};
        use tracing_subscriber::prelude::*;

        let targets = Targets::new()
            .with_target("fluxdot::tests", LevelFilter::TRACE)
            .with_target("fluxdot::parse", LevelFilter::DEBUG)
            .with_target("fluxdot::export", LevelFilter::DEBUG)
            .with_target("fluxdot::prettify", LevelFilter::TRACE);

        let formatter = tracing_subscriber::fmt::layer().with_test_writer();

        let _guard = tracing_subscriber::registry()
            .with(targets)
            .with(formatter)
            .set_default();
    };
}

pub(super) use trace_capture;
