//! ログ初期化
//!
//! 標準出力は画面表示に使うので、ログは標準エラーへ出す。
//! `RUST_LOG` があればそれを優先する。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "caguuu=info,caguuu_assist=info,caguuu_common=info";
const VERBOSE_FILTER: &str = "caguuu=debug,caguuu_assist=debug,caguuu_common=debug";

pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // テスト等で二重初期化されても落とさない
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
