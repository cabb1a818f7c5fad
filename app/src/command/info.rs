use parley_config::Config;
use parley_nlp::HeuristicPipeline;

/// Strategy for displaying configuration information.
///
/// Outputs the bot name, the config path, the compiled rule table
/// summary and the pipeline description.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let rules = config.rule_set()?;

        println!("=== parley Configuration ===\n");

        println!("Bot:");
        println!("  Name: {}", config.bot.name);
        println!("  Config path: {}", Config::config_path()?.display());
        println!();

        println!("Rule table:");
        let source = if config.rules.is_empty() {
            "built-in"
        } else {
            "config"
        };
        println!("  Source: {source}");
        println!("  Rules: {}", rules.len());
        for rule in &rules {
            println!("    {:40} ({} responses)", rule.pattern(), rule.responses().len());
        }
        println!();

        println!("Pipeline:");
        println!("  {}", HeuristicPipeline::describe());

        Ok(())
    }
}
