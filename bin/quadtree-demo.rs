use clap::Parser;
use quadtree::config::LoggingConfig;
use quadtree::{DemoConfig, Rectangle, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "quadtree.toml")]
    config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    generate_config: bool,

    /// Node capacity (overrides config file)
    #[arg(long)]
    capacity: Option<usize>,

    /// Output path for the JSON document (overrides config file)
    #[arg(short, long)]
    output: Option<String>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Number of random 10x10 rectangles to insert in an 800x600 field
    #[arg(long, default_value_t = 0)]
    random: usize,

    /// Seed for the random rectangles
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 生成默认配置文件
    if args.generate_config {
        let config = DemoConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        return Ok(());
    }

    // 加载配置
    let mut config = DemoConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(capacity) = args.capacity {
        config.tree.capacity = capacity;
    }
    if let Some(output) = args.output {
        config.output.path = output.into();
    }
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }

    // 验证配置
    config.validate()?;

    // 初始化日志系统
    init_logging(&config.logging)?;

    info!("🚀 Starting QuadTree demo...");
    info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));
    config.print_summary();

    let mut tree = config.tree.build::<Rectangle>()?;
    tree.subscribe(|change| debug!("Tree changed: {:?}", change));

    tree.insert(Rectangle::new(-160.0, -160.0, 5.0, 5.0))?;

    if args.random > 0 {
        tree.insert_all(random_rectangles(args.random, args.seed))?;
    }

    info!(
        "🌳 Tree holds {} items in {} nodes (depth {}), region {}",
        tree.len(),
        tree.node_count(),
        tree.depth(),
        tree.rect()
    );
    debug!("Tree structure:\n{}", tree.render_structure());

    let sample = Rectangle::new(100.0, 100.0, 1.0, 1.0);
    info!(
        "🔍 {} items intersect {}",
        tree.retrieve_with_logging(sample, true).len(),
        sample
    );

    tree.dump_to_file(&config.output.path)?;
    info!("💾 Wrote {}", config.output.path.display());

    Ok(())
}

/// 在 800x600 的区域内生成随机矩形
fn random_rectangles(count: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Rectangle::new(
                rng.gen_range(-400.0..400.0_f64).floor(),
                rng.gen_range(-400.0..200.0_f64).floor(),
                10.0,
                10.0,
            )
        })
        .collect()
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::sync::Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }

    Ok(())
}
