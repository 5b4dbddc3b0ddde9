use clap::{Parser, Subcommand};

use dental_lab::api::booking::functions::compose_message;
use dental_lab::api::booking::structures::BookingRequest;
use dental_lab::config::Config;
use dental_lab::form::client::RelayClient;
use dental_lab::form::controller::RelayTransport;
use dental_lab::services::telegram::{Notifier, TelegramService};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, verbatim_doc_comment)]
/// Утиліта командного рядка для оператора relay.
/// Дозволяє перевірити конфігурацію і надіслати тестову заявку.
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Завантажує конфігурацію з оточення і показує стан доставки.
    Check,
    /// Складає тестову заявку і доставляє її в налаштований Telegram-чат.
    SendTest {
        /// Ім'я пацієнта в тестовій заявці.
        #[arg(short, long, default_value = "Тестовий Пацієнт")]
        name: String,

        /// Телефон у канонічному форматі.
        #[arg(short, long, default_value = "+380 99 123 45 67")]
        phone: String,

        /// Код послуги (наприклад, "hygiene").
        #[arg(short, long)]
        service: Option<String>,

        /// Бажана дата у форматі YYYY-MM-DD.
        #[arg(short, long)]
        date: Option<String>,

        /// Надіслати через relay-ендпоінт (потрібен PUBLIC_URL),
        /// а не напряму в Telegram.
        #[arg(long)]
        via_relay: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Не вдалося завантажити конфігурацію");
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check => {
            println!("host: {}", config.host);
            println!("port: {}", config.port);
            println!("telegram api base: {}", config.effective_telegram_api_base());
            if config.telegram_configured() {
                println!("Telegram-доставку налаштовано.");
            } else {
                // Значення секретів не друкуємо ніколи, лише факт відсутності
                println!(
                    "TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID не задано: \
                     заявки завершуватимуться помилкою 'Server misconfigured'."
                );
            }
        }
        Commands::SendTest {
            name,
            phone,
            service,
            date,
            via_relay,
        } => {
            let request = BookingRequest {
                name: name.clone(),
                phone: phone.clone(),
                email: None,
                service: service.clone(),
                date: date.clone(),
                comment: Some("Тестова заявка з admin-cli".to_string()),
                website: String::new(),
            };

            if *via_relay {
                // Повний шлях: через розгорнутий relay, як з форми на сайті
                let origin = config.public_url.as_deref().ok_or(
                    "PUBLIC_URL не задано: для --via-relay потрібен origin relay-сервера",
                )?;
                let relay = RelayClient::new(origin, None)?;
                relay.submit(&request).await?;
                println!("Тестову заявку надіслано через {}.", relay.endpoint());
            } else {
                let telegram = TelegramService::from_config(&config);
                let message = compose_message(&request);
                telegram.deliver(&message).await?;
                println!("Тестову заявку доставлено.");
            }
        }
    }

    Ok(())
}
