// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use nlutab::application::use_cases::analyze_use_case::AnalyzeUseCase;
use nlutab::backends::watson::WatsonNluClient;
use nlutab::config::settings::Settings;
use nlutab::infrastructure::input;
use nlutab::infrastructure::sink::{self, CsvSink};
use nlutab::utils::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Analyze URLs or text with an NLU service and tabulate the results
#[derive(Parser, Debug)]
#[command(name = "nlutab", version, about)]
struct Cli {
    /// Input file with one URL or text per line
    inputs: PathBuf,

    /// Output CSV file, or a directory to receive a timestamped "Results" file
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

/// 主函数
///
/// 应用程序入口点，串起配置、输入、分析和制表输出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting nlutab...");

    let cli = Cli::parse();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Read inputs and check the output target before any HTTP call
    let inputs = input::read_inputs(&cli.inputs)?;
    sink::validate_target(&cli.output)?;

    // 4. Build the backend and run the batch
    let backend = Arc::new(WatsonNluClient::new(&settings.api)?);
    let use_case = AnalyzeUseCase::new(backend, settings);
    let csv_sink = CsvSink::new(cli.output);

    let path = use_case.run(&inputs, &csv_sink).await?;
    info!("Results written to {}", path.display());

    Ok(())
}
