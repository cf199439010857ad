use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match gptcmd::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gptcmd: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
