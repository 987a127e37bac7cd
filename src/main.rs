use anyhow::Result;

fn main() -> Result<()> {
    chatgpt_history_search::cli::run()
}
