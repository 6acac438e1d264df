//! Drains reducer-emitted [`RuntimeEffect`] values into the host, in dispatch order.

use leptos::*;

use crate::{
    host::DesktopHostContext, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext,
};

/// Installs the reactive drain for [`DesktopRuntimeContext::effects`].
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        // Taken before running: effects dispatched by a handler form the next batch.
        let batch = runtime.effects.try_update(std::mem::take).unwrap_or_default();
        run_batch(&runtime.host.get_value(), runtime, batch);
    });
}

fn run_batch(
    host: &DesktopHostContext,
    runtime: DesktopRuntimeContext,
    batch: Vec<RuntimeEffect>,
) {
    for effect in batch {
        host.run_runtime_effect(runtime, effect);
    }
}
