use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{format_amount, CategoryTotal};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 400;
const CANVAS_HEIGHT: u32 = 300;

/// Slice colors, reused in order when there are more categories than colors
const SLICE_COLORS: [RGBColor; 6] = [
    RGBColor(0x88, 0x84, 0xd8),
    RGBColor(0x82, 0xca, 0x9d),
    RGBColor(0xff, 0xc6, 0x58),
    RGBColor(0xff, 0x7f, 0x50),
    RGBColor(0x00, 0xc4, 0x9f),
    RGBColor(0xd0, 0xed, 0x57),
];

pub fn slice_color(index: usize) -> RGBColor {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub totals: Vec<CategoryTotal>,
}

/// Pie chart of expense totals per category
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
        ctx.props().totals != old_props.totals
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().totals.is_empty() {
            self.draw_chart(&ctx.props().totals);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let totals = &ctx.props().totals;

        html! {
            <div class="category-chart">
                <h3>{"Spending by Category"}</h3>
                {if totals.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No expenses to chart yet"}</p>
                        </div>
                    }
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
                                {for totals.iter().enumerate().map(|(index, total)| {
                                    let color = slice_color(index);
                                    html! {
                                        <li>
                                            <span
                                                class="legend-swatch"
                                                style={format!("background: rgb({}, {}, {})", color.0, color.1, color.2)}
                                            ></span>
                                            {format!("{}: ₹{}", total.category, format_amount(total.total))}
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
    fn draw_chart(&self, totals: &[CategoryTotal]) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let Some(backend) = CanvasBackend::with_canvas_object(canvas) else {
            log::warn!(target: "category-chart", "Canvas 2d context unavailable");
            return;
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let sizes: Vec<f64> = totals.iter().map(|t| t.total).collect();
        let colors: Vec<RGBColor> = (0..totals.len()).map(slice_color).collect();
        let labels: Vec<&'static str> = totals.iter().map(|t| t.category.label()).collect();

        let center = ((CANVAS_WIDTH / 2) as i32, (CANVAS_HEIGHT / 2) as i32);
        let radius = 100.0;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        pie.label_offset(20.0);

        if let Err(e) = root.draw(&pie) {
            log::warn!(target: "category-chart", "Failed to draw category chart: {:?}", e);
            return;
        }

        if let Err(e) = root.present() {
            log::warn!(target: "category-chart", "Failed to present category chart: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_colors_cycle() {
        assert_eq!(slice_color(0), RGBColor(0x88, 0x84, 0xd8));
        assert_eq!(slice_color(5), RGBColor(0xd0, 0xed, 0x57));
        assert_eq!(slice_color(6), slice_color(0));
        assert_eq!(slice_color(13), slice_color(1));
    }
}
