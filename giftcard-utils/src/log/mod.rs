use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub fn init_test_log() {
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .try_init();
}

pub fn init_log() {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .event_format(CustomEventFormat)
        .init();
}

struct CustomEventFormat;

impl<S, N> FormatEvent<S, N> for CustomEventFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{} ", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        write!(writer, "{} ", meta.level())?;
        write!(writer, "{} ", meta.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
