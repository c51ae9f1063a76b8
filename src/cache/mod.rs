//! 缓存层
//!
//! ObjectCache 为统一的字符串缓存抽象，后端通过插件注册表挑选，
//! 当前提供 Moka（进程内）与 Redis 两种实现。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存插件
///
/// 在模块加载期（ctor）把构造器塞进注册表，
/// 启动流程按配置的 cache.type 取用。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        paste::paste! {
            #[ctor::ctor]
            #[allow(non_snake_case)]
            fn [<__register_object_cache_ $plugin>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let plugin = <$plugin>::new().map_err(|e| {
                                $crate::errors::TrainSystemError::cache_connection(e)
                            })?;
                            Ok(Box::new(plugin) as Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
