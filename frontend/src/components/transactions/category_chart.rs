use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::summary::CategoryTotal;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 400;
const CANVAS_HEIGHT: u32 = 300;

/// Five-color palette cycled across pie slices and legend swatches.
const PALETTE: [RGBColor; 5] = [
    RGBColor(0, 136, 254),
    RGBColor(0, 196, 159),
    RGBColor(255, 187, 40),
    RGBColor(255, 128, 66),
    RGBColor(136, 132, 216),
];

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub data: Vec<CategoryTotal>,
    pub loading: bool,
}

/// Expense-breakdown pie drawn onto a canvas.
pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().data != old_props.data {
            self.draw_chart(&ctx.props().data);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().data.is_empty() {
            self.draw_chart(&ctx.props().data);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let data = &ctx.props().data;
        let loading = ctx.props().loading;

        html! {
            <div class="chart-container">
                {if data.is_empty() && loading {
                    html! { <div class="chart-empty">{"Loading chart data..."}</div> }
                } else if data.is_empty() {
                    html! { <div class="chart-empty">{"No expense data yet"}</div> }
                } else {
                    html! {
                        <>
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="category-chart-canvas"
                                width={CANVAS_WIDTH.to_string()}
                                height={CANVAS_HEIGHT.to_string()}
                            ></canvas>
                            <ul class="chart-legend">
                                {for data.iter().enumerate().map(|(index, entry)| {
                                    let color = PALETTE[index % PALETTE.len()];
                                    html! {
                                        <li>
                                            <span
                                                class="legend-swatch"
                                                style={format!("background: rgb({}, {}, {})", color.0, color.1, color.2)}
                                            ></span>
                                            <span class="capitalize">{&entry.category}</span>
                                            <span class="legend-amount">{format!("${:.2}", entry.amount)}</span>
                                        </li>
                                    }
                                })}
                            </ul>
                        </>
                    }
                }}
            </div>
        }
    }
}

impl CategoryChart {
    fn draw_chart(&self, data: &[CategoryTotal]) {
        let (sizes, labels) = pie_slices(data);
        if sizes.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let center = (CANVAS_WIDTH as i32 / 2, CANVAS_HEIGHT as i32 / 2);
        let radius = (CANVAS_WIDTH.min(CANVAS_HEIGHT) as f64 / 2.0) * 0.75;
        let colors: Vec<RGBColor> = (0..sizes.len())
            .map(|index| PALETTE[index % PALETTE.len()])
            .collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&RGBColor(60, 60, 60)));
        pie.percentages(("sans-serif", 12).into_font().color(&WHITE));

        if root.draw(&pie).is_err() {
            return;
        }

        let _ = root.present();
    }
}

/// Slice sizes and labels for the pie. Non-positive totals are skipped; a
/// slice needs a positive angle.
fn pie_slices(data: &[CategoryTotal]) -> (Vec<f64>, Vec<String>) {
    let mut sizes = Vec::new();
    let mut labels = Vec::new();
    for entry in data {
        if entry.amount > 0.0 {
            sizes.push(entry.amount);
            labels.push(entry.category.clone());
        }
    }
    (sizes, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, amount: f64) -> CategoryTotal {
        CategoryTotal {
            category: category.to_string(),
            amount,
        }
    }

    #[test]
    fn slices_skip_non_positive_totals() {
        let data = vec![
            entry("food", 30.0),
            entry("rent", 0.0),
            entry("utilities", 12.5),
        ];
        let (sizes, labels) = pie_slices(&data);
        assert_eq!(sizes, vec![30.0, 12.5]);
        assert_eq!(
            labels,
            vec!["food".to_string(), "utilities".to_string()]
        );
    }

    #[test]
    fn empty_data_yields_no_slices() {
        let (sizes, labels) = pie_slices(&[]);
        assert!(sizes.is_empty());
        assert!(labels.is_empty());
    }

    #[test]
    fn palette_cycles_past_five_slices() {
        assert_eq!(PALETTE[5 % PALETTE.len()], PALETTE[0]);
        assert_eq!(PALETTE[7 % PALETTE.len()], PALETTE[2]);
    }
}
