use log::error;
use recipe_normalize::{
    fetch_random_recipe, fetch_recipe_by_id, search_recipes, CanonicalRecipe, NormalizeError,
    Settings,
};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "Usage: recipe-normalize <random | search <name> | lookup <id>>";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<String, Box<dyn std::error::Error>> {
    let settings = Settings::load().map_err(NormalizeError::from)?;

    let recipes: Vec<CanonicalRecipe> = match args {
        [command] if command == "random" => vec![fetch_random_recipe(&settings, None).await?],
        [command, rest @ ..] if command == "search" && !rest.is_empty() => {
            search_recipes(&settings, &rest.join(" "), None).await?
        }
        [command, id] if command == "lookup" => {
            vec![fetch_recipe_by_id(&settings, id, None).await?]
        }
        _ => return Err(USAGE.into()),
    };

    Ok(serde_json::to_string_pretty(&recipes)?)
}
