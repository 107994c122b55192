//! Fade Host - headless 演示
//!
//! 以固定帧率模拟一次淡入淡出，并逐帧输出目标值。

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use fade_host::{DemoOptions, HostConfig, TargetKind, demo, init_tracing};
use fade_runtime::FadeDirection;
use tracing::{error, info};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "fade-host", about = "以固定帧率模拟一次淡入淡出")]
struct Args {
    /// 配置文件路径
    #[arg(long, default_value = "fade.json")]
    config: PathBuf,

    /// 方向（"in" / "out"）
    #[arg(long)]
    direction: Option<String>,

    /// 时长（秒）
    #[arg(long)]
    duration: Option<f32>,

    /// 目标种类
    #[arg(long, value_enum)]
    target: Option<TargetKind>,

    /// 使用真实时间（传入 false 会被拒绝）
    #[arg(long)]
    unscaled: Option<bool>,

    /// 模拟帧率
    #[arg(long)]
    fps: Option<u32>,

    /// 缩放时间倍率
    #[arg(long)]
    time_scale: Option<f32>,

    /// 在第几帧之后暂停缩放时间
    #[arg(long)]
    pause_after: Option<u64>,

    /// 日志级别
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{e:#}");
        eprintln!("fade-host error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = HostConfig::load(&args.config);
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if let Some(fps) = args.fps {
        config.frame_rate = fps;
    }
    if let Some(time_scale) = args.time_scale {
        config.time_scale = time_scale;
    }
    if let Some(target) = args.target {
        config.demo.target = target;
    }

    init_tracing(config.tracing_level()?);

    config.validate().context("配置无效")?;

    // 命令行的方向与时长交给 FadeStepper 校验
    let mut options = DemoOptions::from_config(&config);
    if let Some(duration) = args.duration {
        options.duration = duration;
    }

    if let Some(token) = args.direction.as_deref() {
        options.direction = token.parse::<FadeDirection>()?;
    }
    if args.unscaled.is_some() {
        options.unscaled = args.unscaled;
    }
    options.pause_after = args.pause_after;

    info!(
        kind = ?options.target,
        direction = %options.direction,
        duration = options.duration,
        fps = options.frame_rate,
        "开始模拟"
    );

    let report = demo::run(&options)?;
    for sample in &report.samples {
        println!("{:>5} {:>8.4}s {:.6}", sample.frame, sample.time, sample.value);
    }

    info!(
        label = %report.target,
        frames = report.samples.len() - 1,
        completed = report.completed,
        "模拟结束"
    );
    Ok(())
}

