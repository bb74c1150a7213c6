use argh::FromArgs;
use int_calculator::{Calculator, Flow};

#[derive(FromArgs)]
/// Evaluate integer arithmetic expressions with variables.
struct Args {
    #[argh(option, short = 'e')]
    /// evaluate a line and print the result; may be repeated. The prompt is not started.
    eval: Vec<String>,

    #[argh(switch, short = 'q')]
    /// do not print the greeting and farewell lines.
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
    let args: Args = argh::from_env();
    let mut calculator = Calculator::new();

    if args.eval.is_empty() {
        return calculator.repl(args.quiet);
    }

    let mut stdout = std::io::stdout().lock();
    for line in &args.eval {
        if calculator.execute_line(line, &mut stdout)? == Flow::Exit {
            break;
        }
    }
    Ok(())
}
