use std::fmt::Write;

use journal_engine::RunReport;

/// Closing report printed after a completed run.
pub fn render_summary(report: &RunReport) -> String {
    let mut out = String::new();
    let rule = "========================================";
    let file_name = report
        .output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "✅ ¡PROCESO COMPLETADO!");
    let _ = writeln!(out, "📁 Carpeta Output:  {}", report.output_folder.display());
    let _ = writeln!(out, "📄 Archivo MD:      {file_name}");
    let _ = writeln!(out, "📝 Entradas:        {}", report.entries_processed);
    if report.text_only {
        let _ = writeln!(out, "ℹ️  Modo:            SOLO TEXTO (Multimedia no procesado)");
    } else {
        let stats = &report.stats;
        let _ = writeln!(out, "🖼  Fotos (WebP):    {}", stats.images);
        let _ = writeln!(out, "🎥 Videos (WebM):   {}", stats.videos);
        if stats.missing > 0 {
            let _ = writeln!(out, "⚠️  Sin original:    {}", stats.missing);
        }
        if stats.errors > 0 {
            let _ = writeln!(out, "❌ Errores:         {}", stats.errors);
        }
    }
    let _ = writeln!(out, "⏱  Tiempo total:    {:.1}s", report.elapsed.as_secs_f64());
    let _ = writeln!(out, "{rule}");
    out
}
