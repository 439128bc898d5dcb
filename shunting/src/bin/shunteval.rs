use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "shunteval", about = "Convert integer arithmetic to postfix and evaluate it")]
#[structopt(setting = structopt::clap::AppSettings::AllowLeadingHyphen)]
struct Options {
    /// Log verbosity, repeat for more (-v warn, -vv info, -vvv debug)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Print the postfix queue instead of evaluating it
    #[structopt(long)]
    convert_only: bool,

    /// Print the input and output token queues
    #[structopt(long)]
    show_queues: bool,

    /// History file for the interactive prompt [default: ~/.shunteval_history]
    #[structopt(long, parse(from_os_str))]
    history: Option<PathBuf>,

    /// Expression to evaluate, starts a prompt when omitted
    expr: Vec<String>,
}

mod repl {
    use log::debug;
    use shunteval::{dump_queue, Error, MathTokenizer, ShuntingParser};

    pub struct Session {
        pub convert_only: bool,
        pub show_queues: bool,
    }

    impl Session {
        pub fn run(&self, input: &str) -> Result<String, Error> {
            let infix = MathTokenizer::new(input.chars())
                .skip_whitespace(true)
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(line) = self.queue_line("input: ", &dump_queue(&infix)) {
                println!("{}", line);
            }

            let rpn = ShuntingParser::parse(infix)?;
            if let Some(line) = self.queue_line("output:", &rpn.to_string()) {
                println!("{}", line);
            }
            if self.convert_only {
                return Ok(rpn.to_string());
            }

            let result = rpn.eval()?;
            Ok(match rpn.to_infix() {
                Some(expr) => format!("{} = {}", expr, result),
                None => result.to_string(),
            })
        }

        // queues go to stdout with --show-queues, to the debug log otherwise
        pub fn queue_line(&self, label: &str, queue: &str) -> Option<String> {
            if self.show_queues {
                return Some(format!("{} {}", label, queue));
            }
            debug!("{} {}", label, queue);
            None
        }
    }

}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn prompt(session: &repl::Session, history: Option<PathBuf>) -> Result<()> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(path) = &history {
        if rl.load_history(path).is_err() {
            info!("no history yet at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("reading input"),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match session.run(&line) {
                    Ok(output) => println!("{}", output),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }
    if let Some(path) = &history {
        rl.save_history(path)
            .with_context(|| format!("saving history to {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let opts = Options::from_args();
    init_logging(opts.verbose);
    debug!("{:?}", opts);

    let session = repl::Session {
        convert_only: opts.convert_only,
        show_queues: opts.show_queues,
    };
    if opts.expr.is_empty() {
        let history = opts
            .history
            .or_else(|| dirs::home_dir().map(|h| h.join(".shunteval_history")));
        return prompt(&session, history);
    }

    let input = opts.expr.join(" ");
    let output = session.run(&input)?;
    println!("{}", output);
    Ok(())
}
