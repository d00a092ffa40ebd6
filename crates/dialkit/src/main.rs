use anyhow::Context;
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use dialkit::format::{ChronoFormatter, FormatOptions, FormatPattern, LocaleTag};
use dialkit::ipc::{Request, SOCKET_PATH};
use dialkit::render::ClockRenderModel;
use dialkit::settings::{Settings, SettingsChange};
use dialkit::style::{DialStyle, HandPalette, Theme};
use dialkit::svg::render_svg;
use dialkit::time::{LocalClock, TimeSampler, TimeSnapshot};
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dialctl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Show the clock widget
    Show,
    /// Hide the clock widget
    Hide,
    /// Re-read the widget's config file
    Reload,
    /// Toggle the settings panel
    Settings,
    /// Switch between the light and dark theme
    Theme { theme: Theme },
    /// Change the numerals on the dial (arabic, roman, minimal)
    Style { style: DialStyle },
    /// Change the hour and minute hand colors (classic, ocean, gold)
    Palette { palette: HandPalette },
    /// Write the dial as an SVG document
    Render {
        #[arg(long, default_value_t = Theme::Light)]
        theme: Theme,
        #[arg(long, default_value_t = DialStyle::Arabic)]
        style: DialStyle,
        #[arg(long, default_value_t = HandPalette::Classic)]
        palette: HandPalette,
        /// Local time to draw (HH:MM:SS) instead of now
        #[arg(long, value_parser = parse_time)]
        at: Option<NaiveTime>,
        /// Locale for the time and date strings
        #[arg(long)]
        locale: Option<String>,
        /// strftime pattern for the date line
        #[arg(long)]
        date_format: Option<String>,
        /// Output file; stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show => send_request(Request::Show),
        Commands::Hide => send_request(Request::Hide),
        Commands::Reload => send_request(Request::Reload),
        Commands::Settings => send_request(Request::Change(SettingsChange::ToggleSettings)),
        Commands::Theme { theme } => send_request(Request::Change(SettingsChange::Theme(theme))),
        Commands::Style { style } => {
            send_request(Request::Change(SettingsChange::DialStyle(style)))
        }
        Commands::Palette { palette } => {
            send_request(Request::Change(SettingsChange::HandPalette(palette)))
        }
        Commands::Render {
            theme,
            style,
            palette,
            at,
            locale,
            date_format,
            output,
        } => {
            let settings = Settings {
                theme,
                dial_style: style,
                hand_palette: palette,
                show_settings: false,
            };
            let mut options = FormatOptions::default();
            if let Some(locale) = locale {
                options.locale = LocaleTag::new(locale);
            }
            if let Some(date_format) = date_format {
                options.date = FormatPattern::new(date_format);
            }
            render(settings, &options, at, output)
        }
    }
}

fn snapshot_at(at: Option<NaiveTime>) -> anyhow::Result<TimeSnapshot> {
    let now = LocalClock.sample();
    let Some(time) = at else {
        return Ok(now);
    };

    let timestamp = now
        .timestamp
        .date_naive()
        .and_time(time)
        .and_local_timezone(*now.timestamp.offset())
        .single()
        .with_context(|| format!("{} does not exist in the local offset", time))?;
    Ok(TimeSnapshot::from_datetime(timestamp))
}

fn render(
    settings: Settings,
    options: &FormatOptions,
    at: Option<NaiveTime>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let formatter = ChronoFormatter::new(options)?;

    let snapshot = snapshot_at(at)?;
    let frame = ClockRenderModel::new(formatter).render(&snapshot, &settings);
    log::info!("Rendering {} ({})", frame.time_text, frame.date_text);
    let svg = render_svg(&frame);

    match output {
        Some(path) => {
            fs_err::write(&path, svg)?;
            log::info!("Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(svg.as_bytes())?,
    }
    Ok(())
}

fn send_request(request: Request) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to clockface at {}: {}. Is clockface running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", request)?;
    Ok(())
}
