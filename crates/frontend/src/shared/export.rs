/// Выгрузка файлов из браузера: Excel через SheetJS и произвольные Blob.
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, HtmlAnchorElement, Url};

/// JS binding для записи xlsx через SheetJS (см. `js/interop.js`)
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = writeWorkbookFile, catch)]
    fn write_workbook_file(rows: JsValue, sheet_name: &str, file_name: &str) -> Result<(), JsValue>;
}

/// Пишет строки в одну вкладку книги и отдаёт файл на скачивание.
///
/// Ключи сериализованной структуры становятся заголовками колонок.
pub fn export_rows_to_xlsx<T: Serialize>(
    rows: &[T],
    sheet_name: &str,
    file_name: &str,
) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let js_rows = rows
        .serialize(&serializer)
        .map_err(|e| format!("Failed to convert rows: {}", e))?;
    write_workbook_file(js_rows, sheet_name, file_name)
        .map_err(|e| format!("Failed to write workbook: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
    let result = click_download_link(&url, filename);
    // Освобождаем URL
    let _ = Url::revoke_object_url(&url);
    result
}

/// Скачивание по прямой ссылке (QR-картинки лежат на CDN).
pub fn download_url(url: &str, filename: &str) -> Result<(), String> {
    click_download_link(url, filename)
}

fn click_download_link(href: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    // Временная ссылка для скачивания
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(href);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}
