pub mod core;
pub mod errors;
pub mod input;
pub mod output;

pub use crate::core::loads::{calculate_loads, LoadResult};
pub use crate::errors::LoadCalcError;
pub use crate::input::{ingest_for_processing, LoadInput, ReferenceVolume};
use crate::output::Output;
use csv::WriterBuilder;
use indexmap::IndexMap;
use std::io::Read;

/// Run one complete load calculation: ingest a JSON parameter document,
/// derive every quantity, and write the results file through the given
/// output.
///
/// Values in the results file are rounded to the nearest watt; the underlying
/// `LoadResult` is never rounded, so callers wanting full precision should
/// use `ingest_for_processing` + `calculate_loads` directly.
pub fn run_project(input: impl Read, output: impl Output) -> Result<LoadResult, LoadCalcError> {
    let input = ingest_for_processing(input)?;

    tracing::info!("running heating/cooling load calculation");
    let result = calculate_loads(&input);

    if !output.is_noop() {
        write_results_output_file(output, &result)?;
    }

    Ok(result)
}

/// The headline quantities of the results file, in report order, with their
/// units. Mirrors the reporting of the reference implementation: heating
/// figures first, then the cooling figures per month.
fn report_rows(result: &LoadResult) -> IndexMap<&'static str, (f64, &'static str)> {
    IndexMap::from([
        ("Total heating load", (result.phi_hl, "W")),
        ("Transmission losses (heating)", (result.phi_t_heating, "W")),
        (
            "Ventilation losses (heating)",
            (result.phi_v_tot_heating, "W"),
        ),
        ("Total cooling load", (result.phi_cl, "W")),
        ("Total cooling load July", (result.phi_cl_july, "W")),
        ("Total cooling load September", (result.phi_cl_sept, "W")),
        (
            "Solar heat gains July (cooling)",
            (result.phi_solar_tot_july, "W"),
        ),
        (
            "Transmission heat gains July (cooling)",
            (result.phi_t_cooling_july, "W"),
        ),
        (
            "Ventilation heat gains July (cooling)",
            (result.phi_v_tot_cooling_july, "W"),
        ),
        (
            "Solar heat gains September (cooling)",
            (result.phi_solar_tot_sept, "W"),
        ),
        (
            "Transmission heat gains September (cooling)",
            (result.phi_t_cooling_sept, "W"),
        ),
        (
            "Ventilation heat gains September (cooling)",
            (result.phi_v_tot_cooling_sept, "W"),
        ),
        ("Internal gains (cooling)", (result.phi_i_cooling, "W")),
    ])
}

fn write_results_output_file(output: impl Output, result: &LoadResult) -> Result<(), LoadCalcError> {
    let writer = output.writer_for_location_key("results")?;
    let mut writer = WriterBuilder::new().from_writer(writer);

    writer.write_record(["Quantity", "Value", "Unit"])?;
    for (name, (value, unit)) in report_rows(result) {
        let rounded = format!("{}", value.round() as i64);
        writer.write_record([name, rounded.as_str(), unit])?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SinkOutput;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Collects everything written through the output into a shared buffer.
    #[derive(Clone, Debug, Default)]
    struct BufferOutput {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Output for BufferOutput {
        fn writer_for_location_key(&self, _location_key: &str) -> anyhow::Result<impl Write> {
            Ok(BufferWriter(self.buffer.clone()))
        }
    }

    #[fixture]
    fn input_document() -> String {
        crate::input::example_input_json().to_string()
    }

    #[rstest]
    fn should_run_project_end_to_end(input_document: String) {
        let result = run_project(input_document.as_bytes(), SinkOutput).unwrap();
        assert_eq!(result.phi_cl, result.phi_cl_july.max(result.phi_cl_sept));
    }

    #[rstest]
    fn should_write_rounded_watt_figures(input_document: String) {
        let output = BufferOutput::default();
        run_project(input_document.as_bytes(), output.clone()).unwrap();

        let written = String::from_utf8(output.buffer.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Quantity,Value,Unit");
        assert_eq!(lines[1], "Total heating load,16130,W");
        assert!(lines.contains(&"Total cooling load,13798,W"));
        assert!(lines.contains(&"Internal gains (cooling),1875,W"));
    }

    #[rstest]
    fn should_report_malformed_document_as_invalid_input() {
        let err = run_project(&b"{\"net_floor_area\": 500.0}"[..], SinkOutput).unwrap_err();
        assert!(matches!(err, LoadCalcError::InvalidInput(_)));
    }
}
