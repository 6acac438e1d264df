//! System monitor and process manager window contents, both fed by periodic synthetic samples.

pub mod metrics;
pub mod processes;

use std::time::Duration;

use desktop_app_contract::{
    use_scoped_interval, BrowserEntropy, ClockSnapshot, ContentModule, ContentMountContext,
    WindowContentProps,
};
use leptos::*;

use crate::{
    metrics::{
        chart_points, network_gauge_percent, sample_metrics, temperature_gauge_percent,
        MetricsHistory, MetricsSample,
    },
    processes::{
        generate_processes, kill_process, status_counts, visible_processes, ProcessRow, SortKey,
    },
};

const DEFAULT_MONITOR_REFRESH: Duration = Duration::from_secs(2);
const DEFAULT_PROCESS_REFRESH: Duration = Duration::from_secs(3);
const CHART_WIDTH: u32 = 400;
const CHART_HEIGHT: u32 = 120;

/// Content module registered for the system monitor window kind.
pub const SYSTEM_MONITOR_CONTENT: ContentModule = ContentModule::new(mount_system_monitor);
/// Content module registered for the process manager window kind.
pub const PROCESS_MANAGER_CONTENT: ContentModule = ContentModule::new(mount_process_manager);

fn mount_system_monitor(context: ContentMountContext) -> View {
    view! {
        <SystemMonitorApp
            props=context.props
            refresh=context.refresh_every.unwrap_or(DEFAULT_MONITOR_REFRESH)
            history_len=context.history_len
        />
    }
    .into_view()
}

fn mount_process_manager(context: ContentMountContext) -> View {
    view! {
        <ProcessManagerApp
            props=context.props
            refresh=context.refresh_every.unwrap_or(DEFAULT_PROCESS_REFRESH)
            search_id=context.primary_input_id
        />
    }
    .into_view()
}

const SYSTEM_INFO: [(&str, &str); 6] = [
    ("OS", "Arch Linux x86_64"),
    ("Kernel", "6.6.8-arch1-1"),
    ("Uptime", "2h 34m"),
    ("CPU", "Intel Core i7-12700K"),
    ("Memory", "16 GB DDR4"),
    ("Storage", "512 GB NVMe SSD"),
];

#[component]
pub fn SystemMonitorApp(
    props: WindowContentProps,
    refresh: Duration,
    history_len: usize,
) -> impl IntoView {
    let history = create_rw_signal({
        let mut history = MetricsHistory::new(history_len);
        history.push(sample_metrics(&mut BrowserEntropy, ClockSnapshot::now()));
        history
    });

    use_scoped_interval(refresh, move || {
        let sample = sample_metrics(&mut BrowserEntropy, ClockSnapshot::now());
        history.update(|history| history.push(sample));
    });

    let latest = Signal::derive(move || history.with(|history| history.latest().cloned()));
    let reading = move |pick: fn(&MetricsSample) -> u32| {
        latest.get().map(|sample| pick(&sample)).unwrap_or_default()
    };
    let series_points = move |pick: fn(&MetricsSample) -> u32| {
        let values = history.with(|history| history.series(pick));
        chart_points(&values, CHART_WIDTH, CHART_HEIGHT)
    };
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    view! {
        <div
            class="app-shell app-monitor-shell"
            on:mousedown=move |_| {
                if !props.is_active_untracked() {
                    props.request_focus();
                }
            }
        >
            <div class="monitor-cards">
                <StatCard
                    label="CPU Usage"
                    value=Signal::derive(move || format!("{}%", reading(|s| s.cpu)))
                    fill=Signal::derive(move || reading(|s| s.cpu))
                />
                <StatCard
                    label="Memory"
                    value=Signal::derive(move || format!("{}%", reading(|s| s.memory)))
                    fill=Signal::derive(move || reading(|s| s.memory))
                />
                <StatCard
                    label="Network"
                    value=Signal::derive(move || format!("{} MB/s", reading(|s| s.network)))
                    fill=Signal::derive(move || network_gauge_percent(reading(|s| s.network)))
                />
                <StatCard
                    label="Temperature"
                    value=Signal::derive(move || format!("{}\u{b0}C", reading(|s| s.temperature)))
                    fill=Signal::derive(move || temperature_gauge_percent(reading(|s| s.temperature)))
                />
            </div>

            <section class="monitor-chart">
                <h3>"CPU Usage Over Time"</h3>
                <svg viewBox=view_box.clone() preserveAspectRatio="none" role="img" aria-label="CPU history">
                    <polyline class="monitor-line monitor-line-cpu" points=move || series_points(|s| s.cpu) />
                </svg>
            </section>

            <section class="monitor-chart">
                <h3>"Memory Usage Over Time"</h3>
                <svg viewBox=view_box preserveAspectRatio="none" role="img" aria-label="Memory history">
                    <polyline class="monitor-line monitor-line-memory" points=move || series_points(|s| s.memory) />
                </svg>
            </section>

            <section class="monitor-info">
                <h3>"System Information"</h3>
                <dl class="monitor-info-grid">
                    {SYSTEM_INFO
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>
            </section>

            <div class="app-statusbar">
                <span>{move || format!("{} sample(s)", history.with(MetricsHistory::len))}</span>
                <span>{move || {
                    latest
                        .get()
                        .map(|sample| format!("Updated {}", sample.time_label))
                        .unwrap_or_else(|| "Waiting for data".to_string())
                }}</span>
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>, fill: Signal<u32>) -> impl IntoView {
    view! {
        <div class="monitor-card">
            <div class="monitor-card-label">{label}</div>
            <div class="monitor-card-value">{move || value.get()}</div>
            <div class="monitor-gauge">
                <div class="monitor-gauge-fill" style:width=move || format!("{}%", fill.get())></div>
            </div>
        </div>
    }
}

#[component]
pub fn ProcessManagerApp(
    props: WindowContentProps,
    refresh: Duration,
    #[prop(default = None)] search_id: Option<&'static str>,
) -> impl IntoView {
    let rows = create_rw_signal(generate_processes(&mut BrowserEntropy));
    let query = create_rw_signal(String::new());
    let sort_key = create_rw_signal(SortKey::default());

    use_scoped_interval(refresh, move || {
        rows.set(generate_processes(&mut BrowserEntropy));
    });

    let visible = Signal::derive(move || {
        rows.with(|rows| query.with(|query| visible_processes(rows, query, sort_key.get())))
    });
    let counts = Signal::derive(move || rows.with(|rows| status_counts(rows)));

    view! {
        <div
            class="app-shell app-processes-shell"
            on:mousedown=move |_| {
                if !props.is_active_untracked() {
                    props.request_focus();
                }
            }
        >
            <div class="app-toolbar">
                <input
                    id=search_id
                    class="app-field processes-search"
                    type="search"
                    placeholder="Search processes..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <label>
                    "Sort by: "
                    <select
                        prop:value=move || sort_key.get().id()
                        on:change=move |ev| {
                            if let Ok(key) = event_target_value(&ev).parse::<SortKey>() {
                                sort_key.set(key);
                            }
                        }
                    >
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| view! { <option value=key.id()>{key.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <div class="processes-stats">
                <div class="processes-stat">
                    <span>"Total Processes"</span>
                    <strong>{move || counts.get().total}</strong>
                </div>
                <div class="processes-stat">
                    <span>"Running"</span>
                    <strong>{move || counts.get().running}</strong>
                </div>
                <div class="processes-stat">
                    <span>"Sleeping"</span>
                    <strong>{move || counts.get().sleeping}</strong>
                </div>
            </div>

            <div class="processes-table-wrap">
                <table class="processes-table" aria-label="Processes">
                    <thead>
                        <tr>
                            <th>"Status"</th>
                            <th>"PID"</th>
                            <th>"Name"</th>
                            <th>"User"</th>
                            <th>"CPU %"</th>
                            <th>"Memory %"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || visible.get() key=|row| row.pid let:row>
                            <ProcessTableRow row=row rows=rows />
                        </For>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ProcessTableRow(row: ProcessRow, rows: RwSignal<Vec<ProcessRow>>) -> impl IntoView {
    view! {
        <tr>
            <td>
                <span
                    class=format!("process-status process-status-{}", row.status.label())
                    title=row.status.label()
                ></span>
            </td>
            <td class="process-pid">{row.pid}</td>
            <td>{row.name}</td>
            <td>{row.user}</td>
            <td>{format!("{:.1}%", row.cpu)}</td>
            <td>{format!("{:.1}%", row.memory)}</td>
            <td>
                <button
                    type="button"
                    class="process-kill"
                    title="Kill Process"
                    on:click=move |_| {
                        rows.update(|rows| {
                            kill_process(rows, row.pid);
                        });
                    }
                >
                    "Kill"
                </button>
            </td>
        </tr>
    }
}
