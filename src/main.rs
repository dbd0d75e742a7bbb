use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Datelike, Months, NaiveDate, Utc};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq, Deserialize, Serialize)]
struct ExpenseRecord {
    pub month: String,
    pub category: String,
    pub amount: f64,
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
struct ForecastRecord {
    pub month: String,
    pub category: String,
    pub forecast_amount: f64,
    pub lower_ci: f64,
    pub upper_ci: f64,
}

const API_BASE_URL: &str = "https://expenseforecaster.onrender.com";

const CATEGORY_PALETTE: [&str; 10] = [
    "#3B82F6", // blue-500
    "#14B8A6", // teal-500
    "#F97316", // orange-500
    "#8B5CF6", // violet-500
    "#EF4444", // red-500
    "#10B981", // emerald-500
    "#F59E0B", // amber-500
    "#6366F1", // indigo-500
    "#EC4899", // pink-500
    "#84CC16", // lime-500
];

#[derive(Clone, PartialEq, Default)]
struct CategorySeries {
    actual: Option<f64>,
    forecast: Option<f64>,
    lower: Option<f64>,
    upper: Option<f64>,
}

#[derive(Clone, PartialEq)]
struct ChartPoint {
    month_key: String,
    date: NaiveDate,
    series: BTreeMap<String, CategorySeries>,
}

#[derive(Clone, PartialEq)]
struct FilterState {
    selected_categories: Vec<String>,
    forecast_range: u32,
    historical_range: u32,
    show_historical: bool,
    show_confidence: bool,
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
}

impl FilterState {
    fn initial(categories: &[String]) -> Self {
        Self {
            selected_categories: categories.to_vec(),
            forecast_range: 6,
            historical_range: 0,
            show_historical: true,
            show_confidence: true,
            date_start: None,
            date_end: None,
        }
    }
}

fn unique_categories(expenses: &[ExpenseRecord], forecasts: &[ForecastRecord]) -> Vec<String> {
    let mut categories = BTreeSet::new();
    for record in expenses {
        categories.insert(record.category.clone());
    }
    for record in forecasts {
        categories.insert(record.category.clone());
    }
    categories.into_iter().collect()
}

fn category_colors(categories: &[String]) -> HashMap<String, &'static str> {
    categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            (
                category.clone(),
                CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()],
            )
        })
        .collect()
}

// The upstream service emits months as either "YYYY-MM" or a full ISO date;
// both snap to the first of the month.
fn parse_month(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d"))
        .ok()?;
    date.with_day(1)
}

fn point_for(points: &mut BTreeMap<NaiveDate, ChartPoint>, date: NaiveDate) -> &mut ChartPoint {
    points.entry(date).or_insert_with(|| ChartPoint {
        month_key: date.format("%Y-%m").to_string(),
        date,
        series: BTreeMap::new(),
    })
}

fn merge_series(
    expenses: &[ExpenseRecord],
    forecasts: &[ForecastRecord],
    selected: &[String],
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
    forecast_range: u32,
    now: NaiveDate,
) -> Vec<ChartPoint> {
    let forecast_cutoff = now
        .checked_add_months(Months::new(forecast_range))
        .unwrap_or(NaiveDate::MAX);
    // The window only applies once both ends are picked.
    let window = match (date_start, date_end) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => None,
    };

    let mut points: BTreeMap<NaiveDate, ChartPoint> = BTreeMap::new();

    // Historical records are never horizon- or window-filtered.
    for record in expenses {
        if !selected.contains(&record.category) {
            continue;
        }
        let date = match parse_month(&record.month) {
            Some(date) => date,
            None => continue,
        };
        let point = point_for(&mut points, date);
        point
            .series
            .entry(record.category.clone())
            .or_default()
            .actual = Some(record.amount);
    }

    for record in forecasts {
        if !selected.contains(&record.category) {
            continue;
        }
        let date = match parse_month(&record.month) {
            Some(date) => date,
            None => continue,
        };
        if date > forecast_cutoff {
            continue;
        }
        if let Some((start, end)) = window {
            if date < start || date > end {
                continue;
            }
        }
        let point = point_for(&mut points, date);
        let series = point.series.entry(record.category.clone()).or_default();
        series.forecast = Some(record.forecast_amount);
        series.lower = Some(record.lower_ci);
        series.upper = Some(record.upper_ci);
    }

    points.into_values().collect()
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

async fn fetch_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, LoadError> {
    let url = format!("{}{}", API_BASE_URL, path);
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

// Both collections load together; if either request fails the whole load is
// treated as failed.
async fn fetch_records() -> Result<(Vec<ExpenseRecord>, Vec<ForecastRecord>), LoadError> {
    let (expenses, forecasts) = futures::join!(
        fetch_json::<Vec<ExpenseRecord>>("/monthly-expenses-data"),
        fetch_json::<Vec<ForecastRecord>>("/all-category-forecast-data")
    );
    Ok((expenses?, forecasts?))
}

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Home,
    Dashboard,
    About,
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Home",
            page: Page::Home,
            icon: icon_home,
        },
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_bar_chart,
        },
        NavItem {
            label: "About",
            page: Page::About,
            icon: icon_info,
        },
    ];

    html! {
        <nav class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center text-blue-600">
                        { icon_bar_chart() }
                        <span class="ml-2 text-xl font-bold text-gray-900">{"ExpenseForecast"}</span>
                    </div>

                    <div class="flex items-baseline space-x-4">
                        { for nav_items.iter().map(|item| {
                            let is_active = item.page == props.active_page;
                            let class_name = if is_active {
                                "px-3 py-2 rounded-md text-sm font-medium transition-colors bg-blue-100 text-blue-700 flex items-center space-x-1"
                            } else {
                                "px-3 py-2 rounded-md text-sm font-medium transition-colors text-gray-600 hover:text-gray-900 hover:bg-gray-100 flex items-center space-x-1"
                            };
                            let on_select = props.on_select.clone();
                            let page = item.page;

                            html! {
                                <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                    <span class="shrink-0">{ (item.icon)() }</span>
                                    <span>{ item.label }</span>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}

struct Feature {
    icon: fn() -> Html,
    title: &'static str,
    description: &'static str,
}

#[derive(Properties, PartialEq)]
struct HomePageProps {
    on_open_dashboard: Callback<()>,
}

#[function_component(HomePage)]
fn home_page(props: &HomePageProps) -> Html {
    let features = vec![
        Feature {
            icon: icon_trending_up,
            title: "Intelligent Forecasting",
            description: "Precomputed forecasts show future expenses with confidence intervals",
        },
        Feature {
            icon: icon_filter,
            title: "Category Filtering",
            description: "Filter by Travel, Payroll, Cloud, and other expense categories",
        },
        Feature {
            icon: icon_calendar,
            title: "Flexible Time Ranges",
            description: "View forecasts for single months, quarters, or custom periods",
        },
    ];

    let open_dashboard = {
        let on_open_dashboard = props.on_open_dashboard.clone();
        Callback::from(move |_| on_open_dashboard.emit(()))
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-16 pb-24">
                <div class="text-center">
                    <h1 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-6">
                        {"Expense Forecast"}
                        <span class="text-blue-600 block">{"Dashboard"}</span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto leading-relaxed">
                        {"Visualize your expense data with intelligent forecasting. Make informed financial decisions with interactive charts, category filtering, and confidence intervals."}
                    </p>
                    <button onclick={open_dashboard.clone()} class="inline-flex items-center px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-lg transition-colors space-x-2 text-lg">
                        <span>{"View Dashboard"}</span>
                        { icon_arrow_right() }
                    </button>
                </div>
            </div>

            <div class="bg-white py-24">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl font-bold text-gray-900 mb-4">{"Powerful Features"}</h2>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            {"Everything you need to understand and predict your expense patterns"}
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        { for features.iter().map(|feature| html! {
                            <div class="text-center p-8 rounded-xl bg-gray-50 hover:bg-gray-100 transition-colors">
                                <div class="inline-flex items-center justify-center w-16 h-16 bg-blue-100 rounded-full mb-6 text-blue-600">
                                    { (feature.icon)() }
                                </div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-4">{ feature.title }</h3>
                                <p class="text-gray-600 leading-relaxed">{ feature.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="bg-blue-600 py-16">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl font-bold text-white mb-4">{"Ready to Explore Your Data?"}</h2>
                    <p class="text-xl text-blue-100 mb-8">
                        {"Start analyzing your expense forecasts with the interactive dashboard"}
                    </p>
                    <button onclick={open_dashboard} class="inline-flex items-center px-8 py-4 bg-white hover:bg-gray-100 text-blue-600 font-semibold rounded-lg transition-colors space-x-2">
                        <span>{"Get Started"}</span>
                        { icon_arrow_right() }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(AboutPage)]
fn about_page() -> Html {
    let methodologies = vec![
        Feature {
            icon: icon_trending_up,
            title: "Time Series Models",
            description: "Forecasts are produced upstream from statistical time series models and served ready to display",
        },
        Feature {
            icon: icon_database,
            title: "Historical Analysis",
            description: "Monthly expense history is analyzed per category to surface trends and seasonality",
        },
        Feature {
            icon: icon_shield,
            title: "Confidence Intervals",
            description: "Each forecast carries a lower and upper bound so the uncertainty is visible at a glance",
        },
        Feature {
            icon: icon_zap,
            title: "Always Current",
            description: "The dashboard fetches fresh records on every visit; no data is stored in the browser",
        },
    ];

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center mb-16">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">{"About ExpenseForecast"}</h1>
                <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                    {"A lightweight dashboard for exploring historical expenses alongside precomputed per-category forecasts. All of the heavy lifting happens upstream; this page is purely a window into the data."}
                </p>
            </div>

            <div class="grid md:grid-cols-2 gap-8 mb-16">
                { for methodologies.iter().map(|item| html! {
                    <div class="flex items-start space-x-4 p-6 rounded-xl bg-white border border-gray-200 shadow-sm">
                        <div class="inline-flex items-center justify-center w-12 h-12 bg-blue-100 rounded-full text-blue-600 shrink-0">
                            { (item.icon)() }
                        </div>
                        <div>
                            <h3 class="text-lg font-semibold text-gray-900 mb-2">{ item.title }</h3>
                            <p class="text-gray-600 leading-relaxed">{ item.description }</p>
                        </div>
                    </div>
                }) }
            </div>

            <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-8">
                <h2 class="text-2xl font-bold text-gray-900 mb-4">{"Where the data comes from"}</h2>
                <p class="text-gray-600 leading-relaxed">
                    {"Two read-only endpoints provide everything on the dashboard: one returns the monthly expense history, the other returns per-category forecasts with confidence bounds. The dashboard merges the two series, applies your filters, and renders the result. Nothing is persisted between visits."}
                </p>
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
fn dashboard_page() -> Html {
    let expenses = use_state(Vec::<ExpenseRecord>::new);
    let forecasts = use_state(Vec::<ForecastRecord>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let filters = use_state(|| FilterState::initial(&[]));
    let load_generation = use_mut_ref(|| 0u32);

    let load = {
        let expenses = expenses.clone();
        let forecasts = forecasts.clone();
        let loading = loading.clone();
        let error = error.clone();
        let filters = filters.clone();
        let load_generation = load_generation.clone();

        Callback::from(move |_: ()| {
            let generation = {
                let mut current = load_generation.borrow_mut();
                *current += 1;
                *current
            };
            loading.set(true);
            error.set(None);

            let expenses = expenses.clone();
            let forecasts = forecasts.clone();
            let loading = loading.clone();
            let error = error.clone();
            let filters = filters.clone();
            let load_generation = load_generation.clone();

            spawn_local(async move {
                let result = fetch_records().await;
                // A retry may have started a newer request pair while this
                // one was in flight; a stale response must not land.
                if *load_generation.borrow() != generation {
                    return;
                }
                match result {
                    Ok((expense_list, forecast_list)) => {
                        let categories = unique_categories(&expense_list, &forecast_list);
                        filters.set(FilterState::initial(&categories));
                        expenses.set(expense_list);
                        forecasts.set(forecast_list);
                    }
                    Err(err) => {
                        gloo_console::error!("Error fetching data:", err.to_string());
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                load.emit(());
                || ()
            },
            (),
        );
    }

    if *loading {
        return html! { <LoadingScreen /> };
    }
    if let Some(message) = &*error {
        return html! { <ErrorScreen message={message.clone()} on_retry={load} /> };
    }

    let categories = unique_categories(&expenses, &forecasts);
    let colors = category_colors(&categories);
    let chart_data = merge_series(
        &expenses,
        &forecasts,
        &filters.selected_categories,
        filters.date_start,
        filters.date_end,
        filters.forecast_range,
        Utc::now().date_naive(),
    );

    let on_filters_change = {
        let filters = filters.clone();
        Callback::from(move |next: FilterState| filters.set(next))
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">{"Expense Dashboard"}</h1>
                <p class="text-gray-600">
                    {"Interactive visualization of historical expenses and future forecasts"}
                </p>
            </div>

            <div class="grid lg:grid-cols-4 gap-8">
                <div class="lg:col-span-1">
                    <FilterPanel
                        categories={categories.clone()}
                        filters={(*filters).clone()}
                        on_change={on_filters_change}
                    />
                </div>

                <div class="lg:col-span-3">
                    <ForecastChart
                        data={chart_data.clone()}
                        categories={filters.selected_categories.clone()}
                        colors={colors}
                        show_historical={filters.show_historical}
                        show_confidence={filters.show_confidence}
                    />

                    <div class="grid md:grid-cols-3 gap-4 mt-8">
                        <SummaryCard title="Total Categories" value={categories.len()} accent="text-blue-600" />
                        <SummaryCard title="Selected Categories" value={filters.selected_categories.len()} accent="text-teal-600" />
                        <SummaryCard title="Data Points" value={chart_data.len()} accent="text-orange-600" />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FilterPanelProps {
    categories: Vec<String>,
    filters: FilterState,
    on_change: Callback<FilterState>,
}

#[function_component(FilterPanel)]
fn filter_panel(props: &FilterPanelProps) -> Html {
    let all_selected = props.filters.selected_categories.len() == props.categories.len();

    let toggle_all = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        let categories = props.categories.clone();
        Callback::from(move |_| {
            let mut next = filters.clone();
            next.selected_categories = if next.selected_categories.len() == categories.len() {
                Vec::new()
            } else {
                categories.clone()
            };
            on_change.emit(next);
        })
    };

    let on_forecast_range = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = filters.clone();
            next.forecast_range = input.value().parse::<u32>().unwrap_or(next.forecast_range);
            on_change.emit(next);
        })
    };

    let on_historical_range = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = filters.clone();
            next.historical_range = input.value().parse::<u32>().unwrap_or(next.historical_range);
            on_change.emit(next);
        })
    };

    let on_start_date = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = filters.clone();
            next.date_start = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok();
            on_change.emit(next);
        })
    };

    let on_end_date = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = filters.clone();
            next.date_end = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok();
            on_change.emit(next);
        })
    };

    let toggle_historical = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            let mut next = filters.clone();
            next.show_historical = !next.show_historical;
            on_change.emit(next);
        })
    };

    let toggle_confidence = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            let mut next = filters.clone();
            next.show_confidence = !next.show_confidence;
            on_change.emit(next);
        })
    };

    html! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-6">
            <div>
                <div class="flex items-center justify-between mb-4">
                    <div class="flex items-center space-x-2 text-gray-600">
                        { icon_filter() }
                        <h3 class="text-lg font-semibold text-gray-900">{"Categories"}</h3>
                    </div>
                    <button onclick={toggle_all} class="text-sm text-blue-600 hover:text-blue-700 font-medium">
                        { if all_selected { "Deselect All" } else { "Select All" } }
                    </button>
                </div>

                <div class="space-y-3 max-h-48 overflow-y-auto">
                    { for props.categories.iter().map(|category| {
                        let filters = props.filters.clone();
                        let on_change = props.on_change.clone();
                        let category_name = category.clone();
                        let checked = filters.selected_categories.contains(category);
                        let toggle = Callback::from(move |_| {
                            let mut next = filters.clone();
                            if let Some(position) = next
                                .selected_categories
                                .iter()
                                .position(|selected| selected == &category_name)
                            {
                                next.selected_categories.remove(position);
                            } else {
                                next.selected_categories.push(category_name.clone());
                            }
                            on_change.emit(next);
                        });

                        html! {
                            <label class="flex items-center space-x-3 cursor-pointer">
                                <input type="checkbox" checked={checked} onclick={toggle} class="h-4 w-4 text-blue-600 rounded border-gray-300 focus:ring-blue-500" />
                                <span class="text-sm text-gray-700 font-medium">{ category.clone() }</span>
                            </label>
                        }
                    }) }
                </div>
            </div>

            <div>
                <h3 class="text-lg font-semibold text-gray-900 mb-4">{"Forecast Range"}</h3>
                <select value={props.filters.forecast_range.to_string()} onchange={on_forecast_range} class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-blue-500 focus:border-blue-500">
                    <option value="1">{"1 Month"}</option>
                    <option value="3">{"3 Months (Quarter)"}</option>
                    <option value="6">{"6 Months"}</option>
                    <option value="12">{"12 Months"}</option>
                </select>
            </div>

            <div>
                <h3 class="text-lg font-semibold text-gray-900 mb-4">{"Historical Range"}</h3>
                <select value={props.filters.historical_range.to_string()} onchange={on_historical_range} class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-blue-500 focus:border-blue-500">
                    <option value="6">{"6 Months"}</option>
                    <option value="12">{"12 Months"}</option>
                    <option value="24">{"24 Months"}</option>
                    <option value="36">{"36 Months"}</option>
                    <option value="0">{"All Historical Data"}</option>
                </select>
            </div>

            <div>
                <div class="flex items-center space-x-2 mb-4 text-gray-600">
                    { icon_calendar() }
                    <h3 class="text-lg font-semibold text-gray-900">{"Date Range"}</h3>
                </div>

                <div class="space-y-3">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Start Date"}</label>
                        <input
                            type="date"
                            value={props.filters.date_start.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                            oninput={on_start_date}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"End Date"}</label>
                        <input
                            type="date"
                            value={props.filters.date_end.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                            oninput={on_end_date}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>
                </div>
            </div>

            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <span class="text-sm font-medium text-gray-700">{"Show Historical Data"}</span>
                    <button onclick={toggle_historical} class="focus:outline-none">
                        { if props.filters.show_historical { icon_toggle_right() } else { icon_toggle_left() } }
                    </button>
                </div>

                <div class="flex items-center justify-between">
                    <span class="text-sm font-medium text-gray-700">{"Show Confidence Intervals"}</span>
                    <button onclick={toggle_confidence} class="focus:outline-none">
                        { if props.filters.show_confidence { icon_toggle_right() } else { icon_toggle_left() } }
                    </button>
                </div>
            </div>
        </div>
    }
}

const CHART_WIDTH: f64 = 960.0;
const CHART_HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 48.0;

// Consecutive points carrying a value for the category; a missing month
// breaks the run, so lines and bands never bridge gaps.
fn contiguous_runs<T>(
    data: &[ChartPoint],
    category: &str,
    pick: impl Fn(&CategorySeries) -> Option<T>,
) -> Vec<Vec<(usize, T)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (index, point) in data.iter().enumerate() {
        match point.series.get(category).and_then(&pick) {
            Some(value) => current.push((index, value)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[derive(Properties, PartialEq)]
struct ForecastChartProps {
    data: Vec<ChartPoint>,
    categories: Vec<String>,
    colors: HashMap<String, &'static str>,
    show_historical: bool,
    show_confidence: bool,
}

#[function_component(ForecastChart)]
fn forecast_chart(props: &ForecastChartProps) -> Html {
    if props.data.is_empty() {
        return html! {
            <div class="h-96 flex items-center justify-center bg-gray-50 rounded-lg">
                <p class="text-gray-500">{"No data available for the selected filters"}</p>
            </div>
        };
    }

    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let count = props.data.len();

    let mut max_value = 0.0f64;
    for point in &props.data {
        for category in &props.categories {
            if let Some(series) = point.series.get(category) {
                if props.show_historical {
                    if let Some(value) = series.actual {
                        max_value = max_value.max(value);
                    }
                }
                if let Some(value) = series.forecast {
                    max_value = max_value.max(value);
                }
                if props.show_confidence {
                    if let Some(value) = series.upper {
                        max_value = max_value.max(value);
                    }
                }
            }
        }
    }
    let max_value = if max_value > 0.0 { max_value * 1.05 } else { 1.0 };

    let x_at = move |index: usize| -> f64 {
        if count <= 1 {
            MARGIN_LEFT + plot_width / 2.0
        } else {
            MARGIN_LEFT + plot_width * index as f64 / (count - 1) as f64
        }
    };
    let y_at = move |value: f64| -> f64 { MARGIN_TOP + plot_height * (1.0 - value / max_value) };

    let mut layers: Vec<Html> = Vec::new();

    for step in 0..=4 {
        let value = max_value * step as f64 / 4.0;
        let y = y_at(value);
        layers.push(html! {
            <>
                <line
                    x1={MARGIN_LEFT.to_string()}
                    y1={y.to_string()}
                    x2={(CHART_WIDTH - MARGIN_RIGHT).to_string()}
                    y2={y.to_string()}
                    stroke="#f3f4f6"
                    stroke-dasharray="3 3"
                />
                <text x={(MARGIN_LEFT - 8.0).to_string()} y={(y + 4.0).to_string()} text-anchor="end" font-size="12" fill="#6b7280">
                    { format_currency(value) }
                </text>
            </>
        });
    }

    let label_stride = (count + 11) / 12;
    for (index, point) in props.data.iter().enumerate() {
        if index % label_stride != 0 {
            continue;
        }
        layers.push(html! {
            <text x={x_at(index).to_string()} y={(CHART_HEIGHT - 16.0).to_string()} text-anchor="middle" font-size="12" fill="#6b7280">
                { format_month_label(point.date) }
            </text>
        });
    }

    for category in &props.categories {
        let color = props.colors.get(category).copied().unwrap_or("#3B82F6");

        if props.show_confidence {
            for run in contiguous_runs(&props.data, category, |series| {
                match (series.lower, series.upper) {
                    (Some(lower), Some(upper)) => Some((lower, upper)),
                    _ => None,
                }
            }) {
                let mut outline: Vec<String> = run
                    .iter()
                    .map(|(index, (_, upper))| format!("{:.1},{:.1}", x_at(*index), y_at(*upper)))
                    .collect();
                outline.extend(
                    run.iter().rev().map(|(index, (lower, _))| {
                        format!("{:.1},{:.1}", x_at(*index), y_at(*lower))
                    }),
                );
                layers.push(html! {
                    <polygon points={outline.join(" ")} fill={color} fill-opacity="0.15" stroke="none" />
                });
            }
        }

        if props.show_historical {
            for run in contiguous_runs(&props.data, category, |series| series.actual) {
                if run.len() > 1 {
                    let points: Vec<String> = run
                        .iter()
                        .map(|(index, value)| format!("{:.1},{:.1}", x_at(*index), y_at(*value)))
                        .collect();
                    layers.push(html! {
                        <polyline points={points.join(" ")} fill="none" stroke={color} stroke-width="2" />
                    });
                }
                for (index, value) in &run {
                    layers.push(html! {
                        <circle cx={x_at(*index).to_string()} cy={y_at(*value).to_string()} r="4" fill={color}>
                            <title>{ format!("{} {} (Actual): {}", props.data[*index].month_key, category, format_currency(*value)) }</title>
                        </circle>
                    });
                }
            }
        }

        for run in contiguous_runs(&props.data, category, |series| series.forecast) {
            if run.len() > 1 {
                let points: Vec<String> = run
                    .iter()
                    .map(|(index, value)| format!("{:.1},{:.1}", x_at(*index), y_at(*value)))
                    .collect();
                layers.push(html! {
                    <polyline points={points.join(" ")} fill="none" stroke={color} stroke-width="2" stroke-dasharray="5 5" />
                });
            }
            for (index, value) in &run {
                layers.push(html! {
                    <circle cx={x_at(*index).to_string()} cy={y_at(*value).to_string()} r="4" fill={color}>
                        <title>{ format!("{} {} (Forecast): {}", props.data[*index].month_key, category, format_currency(*value)) }</title>
                    </circle>
                });
            }
        }
    }

    html! {
        <div class="bg-white p-6 rounded-lg shadow-sm border border-gray-200">
            <div class="mb-6">
                <h2 class="text-xl font-semibold text-gray-900">{"Expense Forecast Visualization"}</h2>
                <p class="text-sm text-gray-600 mt-1">{"Historical data and future projections by category"}</p>
            </div>

            <svg viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)} class="w-full h-auto">
                { for layers.into_iter() }
            </svg>

            <div class="flex flex-wrap gap-x-6 gap-y-2 mt-4">
                { for props.categories.iter().map(|category| {
                    let color = props.colors.get(category).copied().unwrap_or("#3B82F6");
                    html! {
                        <>
                            { if props.show_historical {
                                html! {
                                    <span class="flex items-center gap-2 text-sm text-gray-700">
                                        <span class="inline-block w-4 h-1 rounded" style={format!("background-color: {}", color)}></span>
                                        { format!("{} (Actual)", category) }
                                    </span>
                                }
                            } else {
                                html! {}
                            } }
                            <span class="flex items-center gap-2 text-sm text-gray-700">
                                <span class="inline-block w-4 border-t-2 border-dashed" style={format!("border-color: {}", color)}></span>
                                { format!("{} (Forecast)", category) }
                            </span>
                        </>
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SummaryCardProps {
    title: &'static str,
    value: usize,
    accent: &'static str,
}

#[function_component(SummaryCard)]
fn summary_card(props: &SummaryCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-lg shadow-sm border border-gray-200">
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{ props.title }</h3>
            <p class={format!("text-3xl font-bold {}", props.accent)}>{ props.value.to_string() }</p>
        </div>
    }
}

#[function_component(LoadingScreen)]
fn loading_screen() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <svg class="animate-spin h-12 w-12 text-blue-600 mx-auto mb-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                    <path d="M21 12a9 9 0 11-6.22-8.56"></path>
                </svg>
                <p class="text-lg font-medium text-gray-700">{"Loading expense data..."}</p>
                <p class="text-sm text-gray-500 mt-2">{"This may take a few moments"}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ErrorScreenProps {
    message: String,
    on_retry: Callback<()>,
}

#[function_component(ErrorScreen)]
fn error_screen(props: &ErrorScreenProps) -> Html {
    let retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_| on_retry.emit(()))
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-lg shadow-sm border border-red-200 p-8 max-w-md w-full text-center">
                <svg class="h-12 w-12 text-red-500 mx-auto mb-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 8v4M12 16h.01"></path>
                </svg>
                <h2 class="text-xl font-semibold text-gray-900 mb-2">{"Error Loading Data"}</h2>
                <p class="text-gray-600 mb-6">{ props.message.clone() }</p>
                <button onclick={retry} class="inline-flex items-center px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors space-x-2">
                    { icon_refresh() }
                    <span>{"Try Again"}</span>
                </button>
            </div>
        </div>
    }
}

fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let digits = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}${}", sign, format_with_commas(rounded.abs()))
}

fn format_month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::Home);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let open_dashboard = {
        let active_page = active_page.clone();
        Callback::from(move |_: ()| active_page.set(Page::Dashboard))
    };

    let content = match *active_page {
        Page::Home => html! { <HomePage on_open_dashboard={open_dashboard} /> },
        Page::Dashboard => html! { <DashboardPage /> },
        Page::About => html! { <AboutPage /> },
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <Navbar active_page={*active_page} on_select={on_select} />
            { content }
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_home() -> Html {
    icon_base("M3 10l9-7 9 7v10a1 1 0 01-1 1h-5v-6H9v6H4a1 1 0 01-1-1z")
}
fn icon_info() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 16v-4M12 8h.01")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
fn icon_filter() -> Html {
    icon_base("M22 3H2l8 9.5V21l4-2v-6.5z")
}
fn icon_calendar() -> Html {
    icon_base("M3 5h18v16H3zM3 9h18M8 3v4M16 3v4")
}
fn icon_database() -> Html {
    icon_base("M12 2C7 2 3 3.3 3 5v14c0 1.7 4 3 9 3s9-1.3 9-3V5c0-1.7-4-3-9-3zM3 5c0 1.7 4 3 9 3s9-1.3 9-3M3 12c0 1.7 4 3 9 3s9-1.3 9-3")
}
fn icon_shield() -> Html {
    icon_base("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")
}
fn icon_zap() -> Html {
    icon_base("M13 2L3 14h9l-1 8 10-12h-9l1-8z")
}
fn icon_arrow_right() -> Html {
    icon_base("M5 12h14M12 5l7 7-7 7")
}
fn icon_refresh() -> Html {
    icon_base("M23 4v6h-6M1 20v-6h6M3.5 9a9 9 0 0114.9-3.4L23 10M1 14l4.6 4.4A9 9 0 0020.5 15")
}
fn icon_toggle_right() -> Html {
    html! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-blue-600">
            <path d="M9 5h6a7 7 0 010 14H9A7 7 0 019 5zM15 12m-3 0a3 3 0 106 0 3 3 0 10-6 0"></path>
        </svg>
    }
}
fn icon_toggle_left() -> Html {
    html! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-gray-400">
            <path d="M9 5h6a7 7 0 010 14H9A7 7 0 019 5zM9 12m-3 0a3 3 0 106 0 3 3 0 10-6 0"></path>
        </svg>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(month: &str, category: &str, amount: f64) -> ExpenseRecord {
        ExpenseRecord {
            month: month.to_string(),
            category: category.to_string(),
            amount,
        }
    }

    fn forecast(month: &str, category: &str, amount: f64, lower: f64, upper: f64) -> ForecastRecord {
        ForecastRecord {
            month: month.to_string(),
            category: category.to_string(),
            forecast_amount: amount,
            lower_ci: lower,
            upper_ci: upper,
        }
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn selected(categories: &[&str]) -> Vec<String> {
        categories.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn unique_categories_sorted_and_deduped() {
        let expenses = vec![
            expense("2024-01", "Travel", 10.0),
            expense("2024-02", "Cloud", 20.0),
            expense("2024-03", "Travel", 30.0),
        ];
        let forecasts = vec![
            forecast("2024-04", "Payroll", 5.0, 4.0, 6.0),
            forecast("2024-04", "Cloud", 5.0, 4.0, 6.0),
        ];

        assert_eq!(
            unique_categories(&expenses, &forecasts),
            vec!["Cloud", "Payroll", "Travel"]
        );
    }

    #[test]
    fn unique_categories_empty_inputs() {
        assert!(unique_categories(&[], &[]).is_empty());
    }

    #[test]
    fn category_colors_are_deterministic() {
        let categories = selected(&["Cloud", "Payroll", "Travel"]);
        assert_eq!(category_colors(&categories), category_colors(&categories));
        assert_eq!(category_colors(&categories)["Cloud"], CATEGORY_PALETTE[0]);
        assert_eq!(category_colors(&categories)["Travel"], CATEGORY_PALETTE[2]);
    }

    #[test]
    fn category_colors_distinct_within_palette() {
        let categories: Vec<String> = (0..10).map(|i| format!("Category{}", i)).collect();
        let colors = category_colors(&categories);
        let distinct: BTreeSet<&str> = colors.values().copied().collect();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn category_colors_cycle_past_palette() {
        let categories: Vec<String> = (0..12).map(|i| format!("Category{:02}", i)).collect();
        let colors = category_colors(&categories);
        assert_eq!(colors["Category10"], colors["Category00"]);
        assert_eq!(colors["Category11"], colors["Category01"]);
    }

    #[test]
    fn parse_month_accepts_both_shapes() {
        assert_eq!(parse_month("2024-05"), Some(day(2024, 5, 1)));
        assert_eq!(parse_month("2024-05-17"), Some(day(2024, 5, 1)));
        assert_eq!(parse_month("not-a-month"), None);
    }

    #[test]
    fn merge_combines_actuals_and_forecasts() {
        let expenses = vec![expense("2024-01", "Travel", 100.0)];
        let forecasts = vec![forecast("2024-02", "Travel", 120.0, 100.0, 140.0)];

        let points = merge_series(
            &expenses,
            &forecasts,
            &selected(&["Travel"]),
            None,
            None,
            6,
            day(2024, 1, 15),
        );

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].month_key, "2024-01");
        assert_eq!(points[0].series["Travel"].actual, Some(100.0));
        assert_eq!(points[0].series["Travel"].forecast, None);
        assert_eq!(points[1].month_key, "2024-02");
        assert_eq!(points[1].series["Travel"].forecast, Some(120.0));
        assert_eq!(points[1].series["Travel"].lower, Some(100.0));
        assert_eq!(points[1].series["Travel"].upper, Some(140.0));
        assert_eq!(points[1].series["Travel"].actual, None);
    }

    #[test]
    fn merge_zero_horizon_excludes_future_forecasts() {
        let expenses = vec![expense("2024-01", "Travel", 100.0)];
        let forecasts = vec![forecast("2024-02", "Travel", 120.0, 100.0, 140.0)];

        let points = merge_series(
            &expenses,
            &forecasts,
            &selected(&["Travel"]),
            None,
            None,
            0,
            day(2024, 1, 15),
        );

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].month_key, "2024-01");
        assert!(points[0].series["Travel"].forecast.is_none());
    }

    #[test]
    fn merge_cutoff_is_relative_to_now() {
        let forecasts = vec![forecast("2024-02", "Travel", 120.0, 100.0, 140.0)];

        let early = merge_series(
            &[],
            &forecasts,
            &selected(&["Travel"]),
            None,
            None,
            0,
            day(2023, 6, 1),
        );
        let late = merge_series(
            &[],
            &forecasts,
            &selected(&["Travel"]),
            None,
            None,
            0,
            day(2024, 6, 1),
        );

        assert!(early.is_empty());
        assert_eq!(late.len(), 1);
    }

    #[test]
    fn merge_date_window_filters_forecasts_only() {
        let expenses = vec![expense("2024-01", "Travel", 100.0)];
        let forecasts = vec![forecast("2024-02", "Travel", 120.0, 100.0, 140.0)];

        let points = merge_series(
            &expenses,
            &forecasts,
            &selected(&["Travel"]),
            Some(day(2024, 3, 1)),
            Some(day(2024, 4, 30)),
            6,
            day(2024, 1, 15),
        );

        // The forecast falls outside the window; the expense record is never
        // window-filtered.
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].series["Travel"].actual, Some(100.0));
        assert!(points[0].series["Travel"].forecast.is_none());
    }

    #[test]
    fn merge_date_window_bounds_are_inclusive() {
        let forecasts = vec![
            forecast("2024-03", "Travel", 120.0, 100.0, 140.0),
            forecast("2024-04", "Travel", 130.0, 110.0, 150.0),
        ];

        let points = merge_series(
            &[],
            &forecasts,
            &selected(&["Travel"]),
            Some(day(2024, 3, 1)),
            Some(day(2024, 4, 1)),
            12,
            day(2024, 1, 15),
        );

        assert_eq!(points.len(), 2);
    }

    #[test]
    fn merge_half_open_window_is_ignored() {
        let forecasts = vec![forecast("2024-02", "Travel", 120.0, 100.0, 140.0)];

        let points = merge_series(
            &[],
            &forecasts,
            &selected(&["Travel"]),
            Some(day(2024, 3, 1)),
            None,
            6,
            day(2024, 1, 15),
        );

        assert_eq!(points.len(), 1);
    }

    #[test]
    fn merge_empty_selection_yields_empty_output() {
        let expenses = vec![expense("2024-01", "Travel", 100.0)];
        let forecasts = vec![forecast("2024-02", "Travel", 120.0, 100.0, 140.0)];

        let points = merge_series(&expenses, &forecasts, &[], None, None, 6, day(2024, 1, 15));

        assert!(points.is_empty());
    }

    #[test]
    fn merge_ignores_unselected_categories() {
        let expenses = vec![
            expense("2024-01", "Travel", 100.0),
            expense("2024-01", "Cloud", 50.0),
        ];

        let points = merge_series(
            &expenses,
            &[],
            &selected(&["Cloud"]),
            None,
            None,
            6,
            day(2024, 1, 15),
        );

        assert_eq!(points.len(), 1);
        assert!(points[0].series.get("Travel").is_none());
        assert_eq!(points[0].series["Cloud"].actual, Some(50.0));
    }

    #[test]
    fn merge_output_sorted_with_unique_months() {
        let expenses = vec![
            expense("2024-03", "Travel", 30.0),
            expense("2024-01", "Travel", 10.0),
            expense("2024-02", "Cloud", 20.0),
            expense("2024-01", "Cloud", 15.0),
        ];

        let points = merge_series(
            &expenses,
            &[],
            &selected(&["Cloud", "Travel"]),
            None,
            None,
            6,
            day(2024, 1, 15),
        );

        let keys: Vec<&str> = points.iter().map(|p| p.month_key.as_str()).collect();
        assert_eq!(keys, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(points[0].series["Travel"].actual, Some(10.0));
        assert_eq!(points[0].series["Cloud"].actual, Some(15.0));
    }

    #[test]
    fn merge_actual_and_forecast_share_a_point() {
        let expenses = vec![expense("2024-01", "Travel", 100.0)];
        let forecasts = vec![forecast("2024-01", "Travel", 110.0, 90.0, 130.0)];

        let points = merge_series(
            &expenses,
            &forecasts,
            &selected(&["Travel"]),
            None,
            None,
            6,
            day(2024, 1, 15),
        );

        assert_eq!(points.len(), 1);
        let series = &points[0].series["Travel"];
        assert_eq!(series.actual, Some(100.0));
        assert_eq!(series.forecast, Some(110.0));
        assert_eq!(series.lower, Some(90.0));
        assert_eq!(series.upper, Some(130.0));
    }

    #[test]
    fn merge_last_record_wins_on_duplicates() {
        let expenses = vec![
            expense("2024-01", "Travel", 100.0),
            expense("2024-01", "Travel", 250.0),
        ];

        let points = merge_series(
            &expenses,
            &[],
            &selected(&["Travel"]),
            None,
            None,
            6,
            day(2024, 1, 15),
        );

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].series["Travel"].actual, Some(250.0));
    }

    #[test]
    fn merge_drops_unparseable_months() {
        let expenses = vec![
            expense("garbage", "Travel", 100.0),
            expense("2024-01", "Travel", 50.0),
        ];

        let points = merge_series(
            &expenses,
            &[],
            &selected(&["Travel"]),
            None,
            None,
            6,
            day(2024, 1, 15),
        );

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].month_key, "2024-01");
    }

    #[test]
    fn expense_record_deserializes_from_api_json() {
        let raw = r#"{"month": "2024-01", "category": "Travel", "amount": 1234.5}"#;
        let record: ExpenseRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.month, "2024-01");
        assert_eq!(record.category, "Travel");
        assert_eq!(record.amount, 1234.5);
    }

    #[test]
    fn forecast_record_deserializes_from_api_json() {
        let raw = r#"{"month": "2024-02", "category": "Travel", "forecast_amount": 120.0, "lower_ci": 100.0, "upper_ci": 140.0}"#;
        let record: ForecastRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.month, "2024-02");
        assert_eq!(record.forecast_amount, 120.0);
        assert_eq!(record.lower_ci, 100.0);
        assert_eq!(record.upper_ci, 140.0);
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1234.4), "$1,234");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(-1234.0), "-$1,234");
    }

    #[test]
    fn format_month_label_is_short_month_and_year() {
        assert_eq!(format_month_label(day(2024, 1, 1)), "Jan 2024");
    }

    #[test]
    fn contiguous_runs_break_on_gaps() {
        let expenses = vec![
            expense("2024-01", "Travel", 10.0),
            expense("2024-03", "Travel", 30.0),
            expense("2024-02", "Cloud", 20.0),
        ];

        let points = merge_series(
            &expenses,
            &[],
            &selected(&["Cloud", "Travel"]),
            None,
            None,
            6,
            day(2024, 1, 15),
        );
        let runs = contiguous_runs(&points, "Travel", |series| series.actual);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0, 10.0)]);
        assert_eq!(runs[1], vec![(2, 30.0)]);
    }
}
