use anyhow::Context;
use clap::{Parser, Subcommand};
use futures::StreamExt;
use local_genai_bridge::config::Config;
use local_genai_bridge::converters::gemini::{
    GeminiContent, GeminiCountTokensRequest, GeminiEmbedContentRequest, GeminiGenerationConfig,
    GeminiRequest, GeminiSystemInstruction,
};
use local_genai_bridge::llm_client::LlmClient;
use local_genai_bridge::router::{self, AppState};
use local_genai_bridge::{ContentGenerator, LocalContentGenerator, logging};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(name = "local-genai-bridge")]
#[command(about = "Serve a local chat-completion backend behind a generate-content API")]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config.yaml", global = true)]
    config: String,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<String>,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long, global = true)]
    proxy: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP gateway
    Serve {
        #[arg(short, long, default_value = "127.0.0.1")]
        ip: String,

        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
    /// Send one prompt and print the reply
    Generate {
        prompt: String,

        #[arg(long)]
        system: Option<String>,

        /// Model name, resolved through model_aliases
        #[arg(short, long)]
        model: Option<String>,

        #[arg(long)]
        temperature: Option<f64>,

        #[arg(long)]
        top_p: Option<f64>,

        #[arg(long)]
        max_tokens: Option<u32>,

        /// Go through the streaming entry point
        #[arg(long)]
        stream: bool,
    },
    /// Print the estimated token count of a prompt
    CountTokens { prompt: String },
    /// Request an embedding (not available on chat-completion backends)
    Embed { text: String },
}

fn build_http_client(proxy: Option<&str>) -> anyhow::Result<reqwest::Client> {
    let client_builder = reqwest::Client::builder();
    let client_builder = if let Some(proxy) = proxy {
        let proxy =
            reqwest::Proxy::all(proxy).with_context(|| format!("invalid proxy: {}", proxy))?;
        client_builder.proxy(proxy)
    } else {
        client_builder
    };
    Ok(client_builder.build()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = Level::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using INFO level.", args.log_level);
        Level::INFO
    });
    logging::init_logging(log_level, args.log_file.as_deref());

    let config = Arc::new(
        Config::from_file(&args.config)
            .with_context(|| format!("failed to load config from {}", args.config))?,
    );
    info!("Configuration loaded successfully from: {}", args.config);

    let http_client = Arc::new(build_http_client(args.proxy.as_deref())?);
    let llm_client = LlmClient::new(http_client, &config.backend);
    let generator = LocalContentGenerator::new(llm_client, config.backend.model.clone());

    match args.command {
        Command::Serve { ip, port } => {
            let app = router::app(AppState {
                generator: Arc::new(generator),
                config: config.clone(),
            });
            let bind_address = format!("{}:{}", ip, port);
            let listener = tokio::net::TcpListener::bind(&bind_address).await?;
            info!(
                "Server started on http://{} (backend {} at {})",
                bind_address, config.backend.name, config.backend.api_base
            );
            axum::serve(listener, app).await?;
        }
        Command::Generate {
            prompt,
            system,
            model,
            temperature,
            top_p,
            max_tokens,
            stream,
        } => {
            let request = GeminiRequest {
                model: config.resolve_model(model.as_deref().unwrap_or_default()),
                contents: vec![GeminiContent::user_text(prompt)],
                system_instruction: system.map(GeminiSystemInstruction::Text),
                generation_config: Some(GeminiGenerationConfig {
                    temperature,
                    top_p,
                    max_output_tokens: max_tokens,
                }),
            };
            if stream {
                let mut responses = generator.generate_content_stream(request).await?;
                while let Some(response) = responses.next().await {
                    print!("{}", response?.text());
                }
                println!();
            } else {
                let response = generator.generate_content(request).await?;
                println!("{}", response.text());
            }
        }
        Command::CountTokens { prompt } => {
            let response = generator
                .count_tokens(GeminiCountTokensRequest {
                    contents: vec![GeminiContent::user_text(prompt)],
                })
                .await?;
            println!("{}", response.total_tokens);
        }
        Command::Embed { text } => {
            let response = generator
                .embed_content(GeminiEmbedContentRequest {
                    content: Some(GeminiContent::user_text(text)),
                })
                .await?;
            println!("{}", serde_json::to_string(&response.embedding.values)?);
        }
    }

    Ok(())
}
