use anyhow::Context;
use clap::Parser;
use morse_translator::app::session::{Session, SessionEvent, HELP_TEXT};
use morse_translator::config::cli::InputSource;
use morse_translator::utils::logger;
use morse_translator::{CliConfig, ConfigProvider, Converter, MorseError, Settings, Translator};
use std::io::{self, BufRead, Write};

fn main() {
    let config = CliConfig::parse();

    // 設定檔錯誤時 logger 還沒初始化，直接輸出到 stderr
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose, settings.log_level());

    tracing::info!("Starting morse-translator");
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    let result = if config.interactive {
        run_interactive(&settings)
    } else {
        run_once(&config, &settings)
    };

    if let Err(e) = result {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run_once(config: &CliConfig, settings: &Settings) -> anyhow::Result<()> {
    let source = InputSource::from_args(&config.text);
    tracing::debug!("Reading input from {:?}", source);

    let input = source
        .read(io::stdin().lock())
        .context("failed to read input")?;

    let output = Translator::new().translate(settings.direction, &input);
    tracing::info!(
        "Translated {} bytes ({}) into {} bytes",
        input.len(),
        settings.direction,
        output.len()
    );

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).context("failed to write output")?;
    stdout.flush().context("failed to write output")?;
    Ok(())
}

fn run_interactive(settings: &Settings) -> anyhow::Result<()> {
    let mut session = Session::new(Translator::new(), settings.direction);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Morse Code Translator. Type :help for commands.")?;

    loop {
        write!(stdout, "{}", session.prompt())?;
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(MorseError::from)
            .context("failed to read from standard input")?;
        if read == 0 {
            tracing::debug!("End of input, leaving session");
            writeln!(stdout)?;
            break;
        }

        match session.handle_line(line.trim_end_matches(['\n', '\r'])) {
            SessionEvent::Output(text) => {
                writeln!(stdout, "{}> {}", session.direction().output_label(), text)?
            }
            SessionEvent::Switched(direction) => writeln!(
                stdout,
                "Mode: {} to {}",
                direction.input_label(),
                direction.output_label()
            )?,
            SessionEvent::Help => writeln!(stdout, "{}", HELP_TEXT)?,
            SessionEvent::Quit => break,
        }
    }

    Ok(())
}

/// 翻譯本身不會失敗；IO 錯誤回傳 2，其餘回傳 1
fn exit_code_for(e: &anyhow::Error) -> i32 {
    for cause in e.chain() {
        if let Some(morse) = cause.downcast_ref::<MorseError>() {
            return morse.exit_code();
        }
        if cause.is::<io::Error>() {
            return 2;
        }
    }
    1
}
